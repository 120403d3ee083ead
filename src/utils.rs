use std::io::{BufReader, Read};

use serde::de::DeserializeOwned;

pub fn toml_from_reader<R, T>(reader: R) -> anyhow::Result<T>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut reader = BufReader::new(reader);
    let mut data = String::with_capacity(1024);
    reader.read_to_string(&mut data)?;
    Ok(toml::from_str(&data)?)
}
