//! Roving tabindex binding.
//!
//! Wraps a navigator together with its derived rows. Every command goes
//! through [`RenderBinding::dispatch`], which moves platform focus through
//! a [`FocusSink`] whenever the focused item changed.

use std::io;

use crossterm::event::KeyEvent;
use serde::Serialize;
use tracing::debug;

use crate::model::NodeId;
use crate::navigator::{Navigator, TabOutcome, Transition};
use crate::processor::Command;

use super::input::{key_to_command, KeyInput};
use super::render::{item_attributes, render_rows, ItemAttributes, RenderStyle};

/// Receiver of platform focus moves
pub trait FocusSink {
    /// Move platform focus to item `id`, drawn at visible row `row`
    fn move_focus(&mut self, id: NodeId, row: usize) -> io::Result<()>;
}

/// One recorded focus move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FocusMove {
    pub id: NodeId,
    pub row: usize,
}

/// Sink that records focus moves instead of performing them
#[derive(Debug, Default)]
pub struct FocusLog {
    moves: Vec<FocusMove>,
}

impl FocusLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moves(&self) -> &[FocusMove] {
        &self.moves
    }

    pub fn last(&self) -> Option<FocusMove> {
        self.moves.last().copied()
    }
}

impl FocusSink for FocusLog {
    fn move_focus(&mut self, id: NodeId, row: usize) -> io::Result<()> {
        self.moves.push(FocusMove { id, row });
        Ok(())
    }
}

/// What a key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    Handled(Transition),
    /// Tab left the tree
    Exit,
    /// Key has no binding
    Ignored,
}

/// Navigator plus the rows currently on screen
#[derive(Debug)]
pub struct RenderBinding<'a> {
    nav: &'a mut Navigator,
    rows: Vec<ItemAttributes>,
}

impl<'a> RenderBinding<'a> {
    pub fn new(nav: &'a mut Navigator) -> Self {
        let rows = item_attributes(nav);
        Self { nav, rows }
    }

    pub fn navigator(&self) -> &Navigator {
        &*self.nav
    }

    pub fn rows(&self) -> &[ItemAttributes] {
        &self.rows
    }

    /// Visible row of `id`
    pub fn row_of(&self, id: NodeId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    /// Row index of the single tab stop
    pub fn tab_stop_row(&self) -> Option<usize> {
        self.rows.iter().position(ItemAttributes::is_tab_stop)
    }

    pub fn render(&self, style: &RenderStyle) -> String {
        render_rows(&self.rows, style)
    }

    /// Apply a command and move platform focus if the focused item changed
    pub fn dispatch(&mut self, command: Command, sink: &mut impl FocusSink) -> io::Result<Transition> {
        let transition = self.nav.apply(command);
        self.settle(transition, sink)
    }

    fn settle(&mut self, transition: Transition, sink: &mut impl FocusSink) -> io::Result<Transition> {
        if transition.changed() {
            self.rows = item_attributes(&*self.nav);
        }
        if let Some(id) = transition.focus_request() {
            match self.row_of(id) {
                Some(row) => sink.move_focus(id, row)?,
                None => debug!(message = "tree.focus_unrendered", id = %id),
            }
        }
        Ok(transition)
    }

    /// Platform focus entered the tree from outside: land on the tab stop
    pub fn enter(&mut self, sink: &mut impl FocusSink) -> io::Result<Option<Transition>> {
        let Some(id) = self.nav.tab_stop() else {
            return Ok(None);
        };
        let transition = self.dispatch(Command::Focus(id), sink)?;
        if transition.focus_request().is_none() {
            self.park(sink)?;
        }
        Ok(Some(transition))
    }

    /// Move platform focus to the tab stop row again, e.g. after a repaint.
    ///
    /// Returns `false` when there is no row to focus.
    pub fn park(&self, sink: &mut impl FocusSink) -> io::Result<bool> {
        let Some(row) = self.tab_stop_row() else {
            return Ok(false);
        };
        sink.move_focus(self.rows[row].id, row)?;
        Ok(true)
    }

    /// Pointer click on a rendered row
    pub fn click(&mut self, row: usize, sink: &mut impl FocusSink) -> io::Result<Option<Transition>> {
        let Some(id) = self.rows.get(row).map(|r| r.id) else {
            return Ok(None);
        };
        self.dispatch(Command::Activate(id), sink).map(Some)
    }

    /// Route a key press through the key map
    pub fn key(&mut self, key: KeyEvent, sink: &mut impl FocusSink) -> io::Result<KeyResponse> {
        match key_to_command(key) {
            None => Ok(KeyResponse::Ignored),
            Some(KeyInput::Command(command)) => self.dispatch(command, sink).map(KeyResponse::Handled),
            Some(KeyInput::Tab { forward }) => match self.nav.tab(forward) {
                TabOutcome::Exit => Ok(KeyResponse::Exit),
                TabOutcome::Moved(transition) => self.settle(transition, sink).map(KeyResponse::Handled),
            },
        }
    }
}
