#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use lazy_static::lazy_static;

lazy_static! {
    /// Platform specific separator character for java classpaths
    pub static ref SEPARATOR: &'static str = if cfg!(windows) { ";" } else { ":" };
}

/// Name of the runtime executable resolved on PATH
pub const JAVA_BINARY: &str = "java";

/// Flag introducing the classpath to the runtime
pub const CLASSPATH_FLAG: &str = "-cp";

/// Classpath fragment for the source tree, relative to the install directory
pub const SOURCE_FRAGMENT: &str = "src";

/// Classpath fragment for the bundled compiler archive, relative to the
/// install directory
pub const ARCHIVE_FRAGMENT: &str = "compiler.jar";

/// Entry class that builds projects from the source tree
pub const BUILDER_CLASS: &str = "com.google.javascript.jscomp.ClosureCompilerBuilder";

/// Entry class for the stock compiler shipped in the archive
pub const COMPILER_CLASS: &str = "com.google.javascript.jscomp.CommandLineRunner";
