use std::{env, io};

use quill::repl;

fn main() -> io::Result<()> {
    let user = env::var("USER").unwrap_or_else(|_| String::from("there"));

    println!("Hello {}! This is the Quill programming language!", user);
    println!("Feel free to type in commands");

    repl::start(io::stdin().lock(), io::stdout())
}
