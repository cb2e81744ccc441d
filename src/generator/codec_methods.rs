//! Text-encoding convenience methods for the FlexID generator
//!
//! All methods use the generator's configured text base (Base62 unless
//! overridden).

use super::FlexId;
use crate::codec;
use crate::error::FlexIdError;
use crate::extractor::IdParts;

impl FlexId {
    /// Generate a new identifier and render it as text
    pub fn next_id_text(&mut self) -> String {
        let id = self.next_id();
        self.encode(id)
    }

    /// Generate a new identifier, returning both text and raw value
    pub fn next_id_text_with_raw(&mut self) -> (String, u128) {
        let id = self.next_id();
        (self.encode(id), id)
    }

    /// Render a raw identifier as text in the configured base
    pub fn encode(&self, id: u128) -> String {
        codec::encode_in(id, self.config.text_base())
    }

    /// Decode identifier text back to its raw value
    pub fn decode_text(&self, encoded: &str) -> Result<u128, FlexIdError> {
        Ok(codec::decode_in(encoded, self.config.text_base())?)
    }

    /// Decode identifier text and unpack it into its components
    pub fn decompose_text(&self, encoded: &str) -> Result<IdParts, FlexIdError> {
        let id = self.decode_text(encoded)?;
        Ok(self.extract.decompose(id))
    }
}
