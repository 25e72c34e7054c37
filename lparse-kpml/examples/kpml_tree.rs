use std::io::Read;

use lparse_kpml::{parse_program, Statement};

fn main() {
    if let Err(err) = main_err() {
        eprintln!("error: {err}");
    }
}

fn main_err() -> Result<(), Box<dyn std::error::Error>> {
    let mut source = String::new();
    std::io::stdin().read_to_string(&mut source)?;

    let program = parse_program(&source)?;
    for statement in &program.statements {
        dump(statement, 0);
    }

    Ok(())
}

fn dump(statement: &Statement, depth: usize) {
    match statement.leaf_value() {
        Some(value) => println!("{:depth$}{value}", ""),
        None => println!("{:depth$}{}", "", statement.operator()),
    }
    for operand in statement.operands() {
        dump(operand, depth + 2);
    }
}
