use std::ffi::OsStr;
use std::io::{BufReader, Read};
use std::path::Path;
use std::{fs, io};

use log::trace;
use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;

mod macros;

#[derive(RustEmbed)]
#[folder = "resources/"]
pub struct Resources;

pub fn toml_from_reader<R, T>(reader: R) -> anyhow::Result<T>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut reader = BufReader::new(reader);
    let mut data = String::with_capacity(16 * 1024);
    reader.read_to_string(&mut data)?;
    Ok(toml::from_str(&data)?)
}

/// Reads an embedded resource as a UTF-8 string.
pub fn resource_to_string(name: &str) -> anyhow::Result<String> {
    trace!("reading embedded resource: {}", name);
    let file = Resources::get(name)
        .ok_or_else(|| anyhow::anyhow!("missing embedded resource \"{}\"", name))?;

    Ok(String::from_utf8(file.data.into_owned())?)
}

pub fn read_to_string(path: impl AsRef<Path>) -> io::Result<String> {
    trace!("reading from: {}", path.as_ref().display());
    fs::read_to_string(path)
}

pub trait PathExt {
    #[must_use]
    fn has_extension<E>(&self, extension: E) -> bool
    where
        for<'a> &'a OsStr: PartialEq<E>;
}

impl PathExt for Path {
    fn has_extension<E>(&self, extension: E) -> bool
    where
        for<'a> &'a OsStr: PartialEq<E>,
    {
        self.extension().map_or(false, |ext| ext == extension)
    }
}
