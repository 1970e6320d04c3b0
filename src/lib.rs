//! # jscomp-launcher
//! ## Introduction

//! Thin launchers for a Java-based JavaScript compiler toolchain.

//! Each binary resolves the directory it was installed to, composes a fixed
//! `java` invocation with a classpath rooted at that directory, appends every
//! argument it was given, and relays the child's exit code. Interrupting a
//! run with Ctrl-C exits with code 1.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod constants;
pub mod launcher;
pub mod util;
