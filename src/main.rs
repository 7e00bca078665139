// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]
use RustedEnvSci::Examples::array_examples::array_examples;
use RustedEnvSci::Examples::function_examples::function_examples;
use RustedEnvSci::Examples::io_examples::io_examples;
use RustedEnvSci::Utils::logger::init_logger;
use log::error;

fn main() {
    if let Err(e) = init_logger(Some("info"), false) {
        eprintln!("{}", e);
    }
    let example = 1;
    let res = match example {
        // argsort of slices, ndarrays and masked arrays
        0 => array_examples(0),
        1 => array_examples(1),
        // safe division
        2 => array_examples(2),
        // sread/fread of a csv file
        3 => io_examples(0),
        4 => io_examples(1),
        // reader options from a task file
        5 => io_examples(2),
        6 => io_examples(3),
        // fitting by grid search
        7 => function_examples(0),
        8 => function_examples(1),
        9 => function_examples(2),
        10 => function_examples(3),
        _ => {
            println!("no example {}", example);
            Ok(())
        }
    };
    if let Err(e) = res {
        error!("example {} failed: {}", example, e);
    }
}
