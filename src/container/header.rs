//! Container header validation: magic marker, version field, body checksum.

use crate::bridge::format::{
    BODY_TEXT_OFFSET, CONTAINER_FORMAT_VERSION, CONTAINER_MAGIC, HEADER_FIELD_LEN,
};
use crate::error::BlueprintError;
use crate::kernels::{base64, checksum};

/// The validated fixed header of a blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ContainerHeader {
    pub version: u32,
    pub checksum: u64,
}

/// Validates the first 16 characters of `input` and the checksum over the rest.
pub(crate) fn validate_header(input: &[u8]) -> Result<ContainerHeader, BlueprintError> {
    if !input.starts_with(CONTAINER_MAGIC) {
        return Err(BlueprintError::MalformedContainer(
            "blueprint format not recognised, missing VCB+ marker".into(),
        ));
    }
    if input.len() < BODY_TEXT_OFFSET {
        return Err(BlueprintError::MalformedContainer(format!(
            "blueprint is {} characters, too short for its header",
            input.len()
        )));
    }

    let field = base64::decode(&input[CONTAINER_MAGIC.len()..BODY_TEXT_OFFSET])?;
    if field.len() != HEADER_FIELD_LEN {
        return Err(BlueprintError::MalformedContainer(format!(
            "header field decodes to {} bytes, expected {}",
            field.len(),
            HEADER_FIELD_LEN
        )));
    }

    let version = checksum::read_be(&field[0..3]) as u32;
    if version != CONTAINER_FORMAT_VERSION {
        return Err(BlueprintError::UnsupportedVersion(version));
    }

    let declared = checksum::read_be(&field[3..9]);
    let computed = checksum::checksum48(&input[BODY_TEXT_OFFSET..]);
    if declared != computed {
        return Err(BlueprintError::ChecksumMismatch { declared, computed });
    }

    Ok(ContainerHeader {
        version,
        checksum: declared,
    })
}
