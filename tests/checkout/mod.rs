mod checkout_branch_restores_files;
mod checkout_with_uncommitted_changes_is_refused;
