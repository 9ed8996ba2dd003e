//! The generated registration table.

use ctorgen_core::GeneratedFile;
use ctorgen_manifest::Profile;

use crate::{Registry, builder::CodeBuilder};

/// C source that declares every registration routine and calls them all
/// from one aggregate function.
///
/// ```text
/// /* WARNING: Autogenerated file - see <generator>! */
///
/// #include "<header>"
///
/// void <register_all> (void);
///
/// extern void _register_<name> (void);
///
/// void
/// <register_all> (void)
/// {
///     _register_<name> ();
/// }
/// ```
pub struct ConstructorsFile<'a> {
    profile: &'a Profile,
    registry: &'a Registry,
    generator: &'a str,
}

impl<'a> ConstructorsFile<'a> {
    /// `generator` is named in the warning header, usually the invoking
    /// program's path.
    pub fn new(profile: &'a Profile, registry: &'a Registry, generator: &'a str) -> Self {
        Self {
            profile,
            registry,
            generator,
        }
    }
}

impl GeneratedFile for ConstructorsFile<'_> {
    fn render(&self) -> String {
        let profile = self.profile;
        let register_all = profile.register_all();
        let routines: Vec<String> = self
            .registry
            .names()
            .iter()
            .map(|name| profile.routine(name))
            .collect();

        CodeBuilder::c()
            .comment(&format!(
                "WARNING: Autogenerated file - see {}!",
                self.generator
            ))
            .blank()
            .line(&format!("#include \"{}\"", profile.header()))
            .blank()
            .line(&format!("void {} (void);", register_all))
            .blank()
            .each(&routines, |b, routine| {
                b.line(&format!("extern void {} (void);", routine))
            })
            .blank()
            .line("void")
            .line(&format!("{} (void)", register_all))
            .block_with_close("{", "}", |b| {
                b.each(&routines, |b, routine| b.line(&format!("{} ();", routine)))
            })
            .build()
    }
}
