//! Interactive prompt adapter
//!
//! Fills any workflow field the CLI did not receive as a flag, re-asking
//! until the pure validators in `workflows::args` accept the value. This
//! layer is entirely outside the lifecycle core: it only produces the
//! typed argument structs.

use std::io::{self, BufRead, Write};

use crate::workflows::args::{
    validate_cid, validate_quantity, validate_royalties, validate_sft_name, validate_tags,
    validate_token_name, validate_token_ticker, IssueTokenArgs, MintArgs,
};

/// Asks questions on `output` and reads answers from `input`. The public
/// `collect_*` functions wire it to stdin/stdout; tests drive it with
/// in-memory buffers.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        // A zero-byte read means the input is closed; surface it instead
        // of re-asking a stream that can never answer.
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `validate` accepts, echoing the validation message on
    /// each rejection.
    fn ask_valid(
        &mut self,
        label: &str,
        validate: impl Fn(&str) -> Result<(), String>,
    ) -> io::Result<String> {
        loop {
            let value = self.ask(label)?;
            match validate(&value) {
                Ok(()) => return Ok(value),
                Err(message) => writeln!(self.output, "{message}")?,
            }
        }
    }

    fn ask_number(
        &mut self,
        label: &str,
        validate: impl Fn(u32) -> Result<(), String>,
    ) -> io::Result<u32> {
        loop {
            let value = self.ask(label)?;
            match value.parse::<u32>() {
                Ok(n) => match validate(n) {
                    Ok(()) => return Ok(n),
                    Err(message) => writeln!(self.output, "{message}")?,
                },
                Err(_) => writeln!(self.output, "enter a whole number")?,
            }
        }
    }

    fn or_ask(
        &mut self,
        provided: Option<String>,
        label: &str,
        validate: impl Fn(&str) -> Result<(), String>,
    ) -> io::Result<String> {
        match provided {
            Some(value) => Ok(value),
            None => self.ask_valid(label, validate),
        }
    }

    pub fn issue_args(
        &mut self,
        name: Option<String>,
        ticker: Option<String>,
    ) -> io::Result<IssueTokenArgs> {
        Ok(IssueTokenArgs {
            token_name: self.or_ask(name, "Token name", validate_token_name)?,
            token_ticker: self.or_ask(ticker, "Token ticker", validate_token_ticker)?,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn mint_args(
        &mut self,
        quantity: Option<u32>,
        name: Option<String>,
        royalties: Option<u32>,
        metadata_cid: Option<String>,
        tags: Option<String>,
        image_cid: Option<String>,
    ) -> io::Result<MintArgs> {
        let quantity = match quantity {
            Some(q) => q,
            None => self.ask_number("SFT quantity", validate_quantity)?,
        };
        let name = self.or_ask(name, "SFT name", validate_sft_name)?;
        let royalties = match royalties {
            Some(r) => r,
            None => self.ask_number("SFT royalties (0-100)", validate_royalties)?,
        };
        Ok(MintArgs {
            quantity,
            name,
            royalties,
            metadata_cid: self.or_ask(metadata_cid, "Metadata CID", validate_cid)?,
            tags: self.or_ask(tags, "Tags (comma separated)", validate_tags)?,
            image_cid: self.or_ask(image_cid, "Image CID", validate_cid)?,
        })
    }
}

pub fn collect_issue_args(
    name: Option<String>,
    ticker: Option<String>,
) -> io::Result<IssueTokenArgs> {
    Prompter::new(io::stdin().lock(), io::stderr().lock()).issue_args(name, ticker)
}

#[allow(clippy::too_many_arguments)]
pub fn collect_mint_args(
    quantity: Option<u32>,
    name: Option<String>,
    royalties: Option<u32>,
    metadata_cid: Option<String>,
    tags: Option<String>,
    image_cid: Option<String>,
) -> io::Result<MintArgs> {
    Prompter::new(io::stdin().lock(), io::stderr().lock()).mint_args(
        quantity,
        name,
        royalties,
        metadata_cid,
        tags,
        image_cid,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn rejected_answer_is_asked_again() {
        let mut p = prompter("x\nMyToken\nMTK\n");
        let args = p.issue_args(None, None).unwrap();
        assert_eq!(args.token_name, "MyToken");
        assert_eq!(args.token_ticker, "MTK");
        let transcript = String::from_utf8(p.output).unwrap();
        assert!(transcript.contains("length must be between 3 and 20"));
    }

    #[test]
    fn closed_input_stops_the_loop() {
        let mut p = prompter("");
        let err = p.issue_args(None, None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn input_closing_mid_dialogue_stops_the_loop() {
        // First answer is invalid, then the stream ends: the re-ask must
        // terminate instead of spinning on empty reads.
        let mut p = prompter("x\n");
        let err = p.issue_args(None, None).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn provided_flags_skip_the_dialogue() {
        let mut p = prompter("");
        let args = p
            .issue_args(Some("MyToken".into()), Some("MTK".into()))
            .unwrap();
        assert_eq!(args.token_name, "MyToken");
        assert!(p.output.is_empty());
    }

    #[test]
    fn non_numeric_quantity_is_asked_again() {
        let mut p = prompter("lots\n10\nCopper Coin\n5\n");
        let args = p
            .mint_args(
                None,
                None,
                None,
                Some("b".repeat(59)),
                Some("metals".into()),
                Some("b".repeat(59)),
            )
            .unwrap();
        assert_eq!(args.quantity, 10);
        assert_eq!(args.royalties, 5);
        let transcript = String::from_utf8(p.output).unwrap();
        assert!(transcript.contains("enter a whole number"));
    }
}
