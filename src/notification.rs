// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Notifications and their payloads.
//!
//! A [`Notification`] is a named event with an optional [`Body`] and an
//! optional type discriminator (called `kind` here, since `type` is a
//! keyword). Notifications are built, broadcast by reference, and dropped;
//! observers only ever see `&Notification`.

use std::{
    any::{Any, type_name},
    fmt,
    rc::Rc,
};

/// A type-erased, shared notification payload.
///
/// Cloning a body shares the underlying value.
#[derive(Clone)]
pub struct Body {
    value: Rc<dyn Any>,
    type_name: &'static str,
}

impl Body {
    pub fn new<T: Any>(value: T) -> Self {
        Self::from_rc(Rc::new(value))
    }

    /// Wraps a value that is already shared, without copying it.
    pub fn from_rc<T: Any>(value: Rc<T>) -> Self {
        Self {
            value,
            type_name: type_name::<T>(),
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Returns a shared handle to the payload if it is a `T`.
    pub fn downcast<T: Any>(&self) -> Option<Rc<T>> {
        Rc::clone(&self.value).downcast::<T>().ok()
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Body")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub struct Notification {
    name: String,
    body: Option<Body>,
    kind: Option<String>,
}

impl Notification {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: None,
            kind: None,
        }
    }

    pub fn with_body<T: Any>(mut self, body: T) -> Self {
        self.body = Some(Body::new(body));
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the body if there is one and it is a `T`.
    ///
    /// A body of a different type reads as `None`, the same as no body at
    /// all; use [`Notification::raw_body`] to tell the two apart.
    pub fn body<T: Any>(&self) -> Option<&T> {
        self.body.as_ref()?.downcast_ref::<T>()
    }

    pub fn raw_body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    pub fn set_body(&mut self, body: Option<Body>) {
        self.body = body;
    }

    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    pub fn set_kind(&mut self, kind: Option<String>) {
        self.kind = kind;
    }
}

impl From<&str> for Notification {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Notification {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Notification Name: {}", self.name)?;
        match &self.body {
            Some(body) => writeln!(f, "Body:{}", body.type_name())?,
            None => writeln!(f, "Body:null")?,
        }
        write!(f, "Type:{}", self.kind.as_deref().unwrap_or("null"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_is_read_back_by_type() {
        let note = Notification::new("A").with_body(42_i32);
        assert_eq!(note.body::<i32>(), Some(&42));
        assert_eq!(note.body::<String>(), None);
        assert!(note.raw_body().is_some());
    }

    #[test]
    fn empty_notification_has_no_body_or_kind() {
        let note = Notification::from("A");
        assert_eq!(note.name(), "A");
        assert!(note.raw_body().is_none());
        assert_eq!(note.kind(), None);
    }

    #[test]
    fn setters_replace_body_and_kind() {
        let mut note = Notification::new("A").with_kind("first");
        note.set_body(Some(Body::new("payload".to_string())));
        note.set_kind(None);

        assert_eq!(note.body::<String>().map(String::as_str), Some("payload"));
        assert_eq!(note.kind(), None);
    }

    #[test]
    fn cloned_body_shares_the_payload() {
        let shared = Rc::new(vec![1, 2, 3]);
        let body = Body::from_rc(Rc::clone(&shared));
        let copy = body.clone();

        let value = copy.downcast::<Vec<i32>>().unwrap();
        assert!(Rc::ptr_eq(&value, &shared));
    }

    #[test]
    fn display_reports_missing_parts_as_null() {
        let note = Notification::new("userAdded");
        assert_eq!(note.to_string(), "Notification Name: userAdded\nBody:null\nType:null");

        let note = note.with_body(7_u8).with_kind("edit");
        assert_eq!(note.to_string(), "Notification Name: userAdded\nBody:u8\nType:edit");
    }
}
