mod filesystem_probe;
