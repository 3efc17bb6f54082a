//! Consistent tokenization strategy
//!
//! Replaces values with per-field tokens of the form `LABEL_NNN_rrrr`. The
//! same original always reuses its stored token within a run, and distinct
//! originals never share one, so the mapping is injective per field.

use super::{field_label, MaskStrategy};
use crate::domain::Result;
use crate::masking::vault::TokenVault;
use rand::{Rng, SeedableRng};

/// Consistent masking backed by a [`TokenVault`]
pub struct ConsistentStrategy {
    vault: TokenVault,
    rng: rand::rngs::StdRng,
}

impl ConsistentStrategy {
    /// Create a consistent strategy with an empty vault
    pub fn new() -> Self {
        Self {
            vault: TokenVault::new(),
            rng: rand::rngs::StdRng::from_entropy(),
        }
    }

    /// Read access to the vault, for export and reversal
    pub fn vault(&self) -> &TokenVault {
        &self.vault
    }

    /// Drop every recorded mapping
    pub fn reset(&mut self) {
        self.vault.clear();
    }

    /// Mint a token no other original of this field holds
    fn generate_token(&mut self, field: &str) -> String {
        let label = field_label(field);
        loop {
            let counter = self.vault.next_counter(field);
            let random_suffix: u32 = self.rng.gen_range(1000..9999);
            let candidate = format!("{label}_{counter:03}_{random_suffix}");
            // The counter alone makes candidates unique; the issued check
            // guards against tokens recorded by other means
            if !self.vault.is_issued(field, &candidate) {
                return candidate;
            }
        }
    }
}

impl MaskStrategy for ConsistentStrategy {
    fn mask(&mut self, field: &str, value: &str) -> Result<String> {
        if let Some(token) = self.vault.token_for(field, value) {
            return Ok(token.to_string());
        }

        let token = self.generate_token(field);
        self.vault.insert(field, value, &token);
        Ok(token)
    }
}

impl Default for ConsistentStrategy {
    fn default() -> Self {
        Self::new()
    }
}
