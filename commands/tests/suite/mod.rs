mod session;
mod working_directory;
