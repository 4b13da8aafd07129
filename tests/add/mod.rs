mod add_directory_recursively;
mod add_replaces_previously_staged_version;
