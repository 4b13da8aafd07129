mod report_unstaged_modification;
