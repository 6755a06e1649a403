mod parse_bad;
mod properties;
