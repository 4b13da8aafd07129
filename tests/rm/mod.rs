mod remove_internal_path_is_refused;
