pub mod delay;
pub mod timing;

#[cfg(test)]
pub mod test_utils;
