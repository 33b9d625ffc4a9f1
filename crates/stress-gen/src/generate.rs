//! Config file generation

use crate::error::GenerateError;
use crate::object::{ConfigObject, FileBody};

/// Generate the content of a single configuration file declaring `objects`
///
/// Objects are emitted in the given order. The caller is responsible for
/// making sure the objects belong together in one module: declared names are
/// unique and everything referred to is included.
///
/// # Errors
/// Returns error if the HCL formatter rejects the assembled body
pub fn generate_config_file(objects: &[ConfigObject]) -> Result<Vec<u8>, GenerateError> {
    let mut body = FileBody::new();
    for obj in objects {
        obj.append_config(&mut body);
    }

    let blocks = body.len();
    let text = hcl::to_string(&body.into_body())?;
    tracing::debug!(
        "Generated config file: {} objects, {} blocks, {} bytes",
        objects.len(),
        blocks,
        text.len()
    );
    Ok(text.into_bytes())
}
