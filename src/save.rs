use std::{
    fs::File,
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::Path,
};

use log::info;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::HuntError;

/// Reads bincode data from `path`, or `None` if there is no such file.
pub fn read<D: DeserializeOwned>(path: &Path) -> Result<Option<D>, HuntError> {
    info!("trying to read {}...", path.display());
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(HuntError::io(path, err)),
    };
    let mut file = BufReader::new(file);
    let data = bincode::serde::decode_from_std_read(&mut file, bincode::config::standard())?;
    Ok(Some(data))
}

pub fn write<D: Serialize>(path: &Path, data: &D) -> Result<(), HuntError> {
    let file = File::create(path).map_err(|err| HuntError::io(path, err))?;
    let mut file = BufWriter::new(file);
    bincode::serde::encode_into_std_write(data, &mut file, bincode::config::standard())?;
    file.flush().map_err(|err| HuntError::io(path, err))?;
    Ok(())
}

/// Reads `path`, or writes out `create()` there when the file does not exist.
pub fn read_or_create<D: Serialize + DeserializeOwned>(
    path: &Path,
    create: impl FnOnce() -> D,
) -> Result<D, HuntError> {
    match read(path)? {
        Some(data) => Ok(data),
        None => {
            info!("creating {}...", path.display());
            let data = create();
            write(path, &data)?;
            Ok(data)
        }
    }
}
