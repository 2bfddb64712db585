use colored::Colorize;
use object_lifetime::{run_all, ConsoleSink, DemoConfig, TraceSink};
use std::rc::Rc;

fn main() {
    let config = DemoConfig::default();

    println!("Hello World !");

    let sink: Rc<dyn TraceSink> = Rc::new(ConsoleSink::from_config(&config));
    if let Err(e) = run_all(&config, &sink) {
        eprintln!("{} {}", "Ownership error:".red().bold(), e);
    }

    println!("Bye !");
}
