// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ByteSource, KeyTrie, NodeId, ReadlineError};
use smallvec::{SmallVec, smallvec};
use std::ops::ControlFlow;

/// Bytes of a matched sequence that fit inline. Escape sequences for special keys are
/// 3 to 6 bytes long.
pub const KEY_SEQUENCE_INLINE_CAPACITY: usize = 8;

pub type KeySequence = SmallVec<[u8; KEY_SEQUENCE_INLINE_CAPACITY]>;

/// Result of one dispatch step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matched<A> {
    pub action: A,
    /// Last byte of [`Self::sequence`]. For the default action this is the byte the
    /// action applies to.
    pub byte: u8,
    /// The bytes that resolved to `action`. Anything read after them has been pushed
    /// back into the source.
    pub sequence: KeySequence,
}

/// Routes a byte stream to actions, longest match wins. See the [module docs] for the
/// overview.
///
/// Resolution when the input stops following the trie (a byte has no matching child,
/// or the stream ends mid-sequence):
///
/// 1. The deepest node on the path that has an action fires. Every byte read after it
///    is pushed back.
/// 2. If no node on the path has an action, the default action fires for the first byte
///    of the path and the rest is pushed back.
/// 3. A byte that doesn't start any sequence gets the default action.
///
/// When the default action is needed but not set, dispatch fails with
/// [`ReadlineError::UnknownCommand`]. Each step consumes at least one byte, so pushed
/// back input always makes progress.
///
/// [module docs]: mod@crate::dispatch
#[derive(Debug, Clone)]
pub struct Dispatcher<A> {
    trie: KeyTrie<A>,
    default_action: Option<A>,
}

impl<A> Default for Dispatcher<A> {
    fn default() -> Self {
        Self {
            trie: KeyTrie::default(),
            default_action: None,
        }
    }
}

impl<A: Clone> Dispatcher<A> {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Bind `action` to `sequence`. Binding the same sequence again replaces the action.
    /// A sequence may be a prefix of another one.
    ///
    /// # Errors
    ///
    /// [`ReadlineError::EmptyKeySequence`] if `sequence` is empty.
    pub fn register(&mut self, sequence: &[u8], action: A) -> Result<(), ReadlineError> {
        self.trie.insert(sequence, action)?;
        Ok(())
    }

    pub fn set_default(&mut self, action: A) { self.default_action = Some(action); }

    #[must_use]
    pub fn trie(&self) -> &KeyTrie<A> { &self.trie }

    /// Read from `source` until exactly one action resolves.
    ///
    /// Returns `Ok(None)` when the stream ends between sequences.
    ///
    /// # Errors
    ///
    /// - [`ReadlineError::Io`] if reading fails.
    /// - [`ReadlineError::UnknownCommand`] if nothing matches and there is no default.
    pub fn next_match(
        &self,
        source: &mut impl ByteSource,
    ) -> Result<Option<Matched<A>>, ReadlineError> {
        let mut path = KeySequence::new();
        let mut current = NodeId::ROOT;
        // Path length up to the deepest node that has an action, and its action.
        let mut longest_match: Option<(usize, &A)> = None;

        loop {
            let maybe_byte = source.read_byte()?;

            let Some(byte) = maybe_byte else {
                if path.is_empty() {
                    return Ok(None);
                }
                return self
                    .resolve_partial(source, &path, longest_match, None)
                    .map(Some);
            };

            if let Some(next) = self.trie.child(current, byte) {
                path.push(byte);
                current = next;
                if let Some(action) = self.trie.action(next) {
                    if self.trie.is_leaf(next) {
                        return Ok(Some(Matched {
                            action: action.clone(),
                            byte,
                            sequence: path,
                        }));
                    }
                    longest_match = Some((path.len(), action));
                }
                continue;
            }

            if path.is_empty() {
                return self.fire_default(byte).map(Some);
            }

            return self
                .resolve_partial(source, &path, longest_match, Some(byte))
                .map(Some);
        }
    }

    /// Dispatch matches to `on_match` until it breaks or the stream ends.
    ///
    /// Returns `Some` with the break value, or `None` if the stream ended first.
    ///
    /// # Errors
    ///
    /// Errors from [`Self::next_match`] and from `on_match` are returned as is.
    pub fn run<B>(
        &self,
        source: &mut impl ByteSource,
        mut on_match: impl FnMut(Matched<A>) -> Result<ControlFlow<B>, ReadlineError>,
    ) -> Result<Option<B>, ReadlineError> {
        while let Some(matched) = self.next_match(source)? {
            if let ControlFlow::Break(value) = on_match(matched)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    /// The input left the trie after `path` (at `pending_byte`, or at the end of the
    /// stream when that is `None`).
    fn resolve_partial(
        &self,
        source: &mut impl ByteSource,
        path: &[u8],
        longest_match: Option<(usize, &A)>,
        pending_byte: Option<u8>,
    ) -> Result<Matched<A>, ReadlineError> {
        if let Some((match_len, action)) = longest_match {
            if let Some(byte) = pending_byte {
                source.unread(byte);
            }
            source.unread_all(&path[match_len..]);
            return Ok(Matched {
                action: action.clone(),
                byte: path[match_len - 1],
                sequence: path[..match_len].into(),
            });
        }

        if self.default_action.is_none() {
            let mut sequence = path.to_vec();
            sequence.extend(pending_byte);
            return Err(ReadlineError::UnknownCommand { sequence });
        }

        if let Some(byte) = pending_byte {
            source.unread(byte);
        }
        source.unread_all(&path[1..]);
        self.fire_default(path[0])
    }

    fn fire_default(&self, byte: u8) -> Result<Matched<A>, ReadlineError> {
        match &self.default_action {
            Some(action) => Ok(Matched {
                action: action.clone(),
                byte,
                sequence: smallvec![byte],
            }),
            None => Err(ReadlineError::UnknownCommand {
                sequence: vec![byte],
            }),
        }
    }
}
