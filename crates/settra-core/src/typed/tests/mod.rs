#[cfg(test)]
mod value_tests;
