//! different utility modules used throughout the project
/// logger set-up: terminal and optional log file
pub mod logger;
/// write tables read by the ascii readers back to text/csv files, pretty printing
pub mod table_writer;
/// parse document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" into HashMap
pub mod task_parser;
