//! Reading source text and files.

use std::fs;
use std::io::ErrorKind;

use mal_ir::errors::{file_not_found, file_too_large, file_unreadable};
use mal_ir::{EvalResult, Runtime, Value};
use mal_reader::read_str;
use tracing::debug;

use super::{require_args, require_str};

/// Largest file `slurp` will read, in bytes.
const MAX_FILE_SIZE: u64 = (1 << 31) - 1;

/// Read the first form of a string, without evaluating it.
pub(super) fn read_string(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    let [source] = require_args::<1>(args)?;
    Ok(read_str(require_str(source)?)?)
}

/// Read a whole UTF-8 file into a string.
pub(super) fn slurp(_: &mut dyn Runtime, args: &[Value]) -> EvalResult {
    let [path] = require_args::<1>(args)?;
    let path = require_str(path)?;

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == ErrorKind::NotFound => return Err(file_not_found(path)),
        Err(err) => return Err(file_unreadable(path, err.to_string())),
    };
    if metadata.len() > MAX_FILE_SIZE {
        return Err(file_too_large(path, metadata.len()));
    }

    debug!(path, bytes = metadata.len(), "slurp");
    fs::read_to_string(path)
        .map(Value::string)
        .map_err(|err| file_unreadable(path, err.to_string()))
}
