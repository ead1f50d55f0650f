pub mod c;
pub mod json;
pub mod quads;
#[cfg(test)]
mod tests;
