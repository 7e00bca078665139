// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]
pub mod Examples;
pub mod Utils;
pub mod arrays;
pub mod error;
pub mod functions;
pub mod io;
pub mod isotopes;
