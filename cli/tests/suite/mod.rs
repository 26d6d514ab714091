mod interpret;
mod repl;
mod serve;
