//! A postfix-notation calculator REPL built on the lexer's token stream.
//!
//!     $ 3 4 +
//!     7
//!     $ 2 10 ^ 24 -
//!     1000

use relex::{alternate, sequence, Rule};
use std::io::{self, BufRead, Write};

fn main() {
    let number = Rule::pattern(r"\d+").unwrap();
    let operator = Rule::pattern(r"[+\-*/^]").unwrap();
    let postfix = sequence(number.clone(), alternate(number, operator).repeat());

    let stdin = io::stdin();
    loop {
        print!("$ ");
        io::stdout().flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            break;
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }

        // The whole line is rejected on any lexing failure; there is no
        // usable partial token sequence.
        let tokens = match postfix.lex(line, true) {
            Ok(tokens) => tokens,
            Err(_) => {
                println!("syntax error: {:?}", line);
                continue;
            }
        };

        let mut stack: Vec<i64> = Vec::new();
        for token in &tokens {
            if let Ok(n) = token.parse::<i64>() {
                stack.push(n);
                continue;
            }
            let (b, a) = (stack.pop().unwrap(), stack.pop().unwrap());
            stack.push(match token.as_ref() {
                "+" => a + b,
                "-" => a - b,
                "*" => a * b,
                "/" => a / b,
                "^" => a.pow(b as u32),
                op => panic!("unknown operator {}", op),
            });
        }
        match stack.pop() {
            Some(result) => println!("{}", result),
            None => println!("empty expression"),
        }
    }
}
