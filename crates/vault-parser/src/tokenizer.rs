//! Tokenizer — split a normalized line into its three fields.

use vault_core::{RecordIdentity, DELIMITER};

/// Split on the first two delimiters. Anything after the second one,
/// further delimiters included, is the password.
pub fn tokenize(line: &str) -> Option<RecordIdentity> {
    let mut fields = line.splitn(3, DELIMITER);
    let url = fields.next()?;
    let username = fields.next()?;
    let password = fields.next()?;
    Some(RecordIdentity::new(url, username, password))
}
