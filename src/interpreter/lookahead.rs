use crate::interpreter::lexer::{Token, Tokenizer};

/// The single pending-token slot between the tokenizer and the evaluator.
///
/// Grammar rules do not all consume the token that ends them: some rules read
/// one token too far and hand it back to their caller through this slot. At
/// any point between evaluator calls the slot is either empty (nothing has
/// been requested yet) or holds the most recently read token that no rule has
/// consumed.
pub struct Lookahead<'src> {
    tokenizer: Tokenizer<'src>,
    slot:      Option<Token>,
    held:      bool,
}

impl<'src> Lookahead<'src> {
    /// Creates an empty cache in front of `tokenizer`.
    #[must_use]
    pub const fn new(tokenizer: Tokenizer<'src>) -> Self {
        Self { tokenizer,
               slot: None,
               held: false }
    }

    /// Reads the next token into the slot and returns it.
    ///
    /// If the cached token is being held (see [`Lookahead::hold`]) it is
    /// returned again instead of reading a fresh one.
    pub fn advance(&mut self) -> Token {
        if self.held
           && let Some(token) = &self.slot
        {
            self.held = false;
            return token.clone();
        }

        self.held = false;
        let token = self.tokenizer.next_token();
        self.slot = Some(token.clone());
        token
    }

    /// Returns the cached token, reading one first if nothing was requested
    /// yet.
    pub fn current(&mut self) -> Token {
        if let Some(token) = &self.slot {
            return token.clone();
        }
        self.advance()
    }

    /// Marks the cached token as unread, so the next [`Lookahead::advance`]
    /// delivers it again.
    pub const fn hold(&mut self) {
        self.held = self.slot.is_some();
    }
}
