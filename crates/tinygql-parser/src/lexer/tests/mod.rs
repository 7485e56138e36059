mod block_string_value_tests;
mod utils;
