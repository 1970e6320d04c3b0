use std::{
    ffi::OsString,
    path::Path,
    process::{Command, Stdio},
};

use anyhow::{Context, Result};

use crate::{
    constants::{
        ARCHIVE_FRAGMENT, BUILDER_CLASS, CLASSPATH_FLAG, COMPILER_CLASS, SEPARATOR,
        SOURCE_FRAGMENT,
    },
    util::{install_dir, java_path},
};

/// Which of the two bundled entry points an invocation forwards to -
/// - the builder, run against the source tree sitting next to the install
/// - the stock compiler, run straight from the bundled archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Builder entry point, classpath covers the source tree and the archive
    Build,
    /// Stock compiler entry point, classpath covers the archive only
    Compile,
}

impl Mode {
    /// Classpath fragments for this mode, relative to the install directory
    pub fn classpath_fragments(&self) -> &'static [&'static str] {
        match self {
            Mode::Build => &[SOURCE_FRAGMENT, ARCHIVE_FRAGMENT],
            Mode::Compile => &[ARCHIVE_FRAGMENT],
        }
    }

    /// Fully qualified name of the entry class the runtime is asked to run
    pub fn entry_class(&self) -> &'static str {
        match self {
            Mode::Build => BUILDER_CLASS,
            Mode::Compile => COMPILER_CLASS,
        }
    }

    /// Joins this mode's fragments under `install_dir` into a classpath
    pub fn classpath(&self, install_dir: &Path) -> String {
        self.classpath_fragments()
            .iter()
            .map(|fragment| install_dir.join(fragment).display().to_string())
            .collect::<Vec<String>>()
            .join(&SEPARATOR)
    }
}

/// A single launcher invocation: an entry-point mode plus the arguments to
/// forward to it.
#[derive(Debug)]
pub struct Launcher {
    /// Entry point and classpath shape this invocation forwards to
    mode: Mode,
    /// Arguments forwarded after the fixed prefix, verbatim
    args: Vec<OsString>,
}

impl Launcher {
    /// Returns a launcher that forwards `args` to the entry point selected
    /// by `mode`
    pub fn new(mode: Mode, args: Vec<OsString>) -> Self {
        Self { mode, args }
    }

    /// Full child argument vector for the given install directory.
    ///
    /// The fixed prefix comes first, then every forwarded argument in its
    /// original order, untouched.
    fn argv(&self, install_dir: &Path) -> Vec<OsString> {
        let mut argv: Vec<OsString> = vec![
            CLASSPATH_FLAG.into(),
            self.mode.classpath(install_dir).into(),
            self.mode.entry_class().into(),
        ];
        argv.extend(self.args.iter().cloned());
        argv
    }

    /// Spawns the runtime with this invocation, waits for it, and returns
    /// its exit code.
    ///
    /// Standard streams are inherited. An interrupt delivered while waiting
    /// exits the whole process with code 1; a child reaped without an exit
    /// code reports 1 as well.
    pub fn run(&self) -> Result<i32> {
        let install_dir = install_dir()?;
        tracing::debug!("resolved install directory {}", install_dir.display());

        let mut cmd = Command::new(java_path()?);
        cmd.args(self.argv(&install_dir))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        tracing::debug!("forwarding invocation {:?}", cmd);

        // Installed before the spawn so an interrupt can never hit the
        // default handler while the child is being waited on.
        ctrlc::set_handler(|| std::process::exit(1))
            .context("Could not install interrupt handler")?;

        let mut child = cmd.spawn().context("Failed to spawn java process.")?;
        let status = child
            .wait()
            .context("Failed to wait for java process.")?;

        Ok(status.code().unwrap_or(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_classpath_joins_source_then_archive() {
        let dir = Path::new("/opt/jscomp");
        let expected = format!(
            "{}{}{}",
            dir.join("src").display(),
            *SEPARATOR,
            dir.join("compiler.jar").display()
        );
        assert_eq!(Mode::Build.classpath(dir), expected);
    }

    #[test]
    fn compile_classpath_is_archive_only() {
        let dir = Path::new("/opt/jscomp");
        assert_eq!(
            Mode::Compile.classpath(dir),
            dir.join("compiler.jar").display().to_string()
        );
    }

    #[test]
    fn entry_classes_match_modes() {
        assert_eq!(
            Mode::Build.entry_class(),
            "com.google.javascript.jscomp.ClosureCompilerBuilder"
        );
        assert_eq!(
            Mode::Compile.entry_class(),
            "com.google.javascript.jscomp.CommandLineRunner"
        );
    }

    #[test]
    fn argv_starts_with_fixed_prefix() {
        let launcher = Launcher::new(Mode::Build, vec![]);
        let dir = Path::new("/opt/jscomp");
        let argv = launcher.argv(dir);

        assert_eq!(argv.len(), 3);
        assert_eq!(argv[0], OsString::from("-cp"));
        assert_eq!(argv[1], OsString::from(Mode::Build.classpath(dir)));
        assert_eq!(
            argv[2],
            OsString::from("com.google.javascript.jscomp.ClosureCompilerBuilder")
        );
    }

    #[test]
    fn argv_preserves_forwarded_arguments_verbatim() {
        let args: Vec<OsString> = vec![
            "--optimize".into(),
            "input.js".into(),
            "--".into(),
            "arg with spaces".into(),
            "".into(),
        ];
        let launcher = Launcher::new(Mode::Build, args.clone());
        let argv = launcher.argv(Path::new("/opt/jscomp"));

        assert_eq!(&argv[3..], args.as_slice());
    }

    #[test]
    fn argv_is_deterministic() {
        let launcher = Launcher::new(Mode::Compile, vec!["a.js".into(), "b.js".into()]);
        let dir = Path::new("/opt/jscomp");
        assert_eq!(launcher.argv(dir), launcher.argv(dir));
    }
}
