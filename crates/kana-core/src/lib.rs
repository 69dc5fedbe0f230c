pub mod expand;
pub mod rules;
pub mod select;
pub mod settings;
pub mod unicode;
pub mod words;

#[cfg(test)]
mod proptest_expand;
