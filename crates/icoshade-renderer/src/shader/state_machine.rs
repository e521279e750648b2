//! Shader variant state machine.
//!
//! Holds the compiled (vertex, fragment) pair together with its program.
//! Each frame the requested pair is compared with the compiled pair; any
//! difference rebuilds the whole program from both stage sources before
//! anything is drawn. A failed rebuild leaves the machine empty, so a
//! stale program built for a different pair is never used.

use icoshade_common::{ShaderStage, VariantSelection};
use tracing::{debug, error, info};

use super::error::ShaderError;
use super::source::ShaderSourceProvider;

/// Turns a pair of stage sources into a drawable program.
///
/// Implemented over wgpu by [`super::WgpuProgramBuilder`]; tests supply a
/// recording builder.
pub trait ProgramBuilder {
    type Program;

    fn build(
        &mut self,
        selection: VariantSelection,
        vertex_source: &str,
        fragment_source: &str,
    ) -> Result<Self::Program, ShaderError>;
}

/// What [`ShaderStateMachine::sync`] did this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Unchanged,
    Rebuilt,
}

pub struct ShaderStateMachine<P> {
    compiled: Option<(VariantSelection, P)>,
    rebuilds: u64,
}

impl<P> ShaderStateMachine<P> {
    pub fn new() -> Self {
        Self {
            compiled: None,
            rebuilds: 0,
        }
    }

    /// Bring the compiled program in line with `requested`.
    ///
    /// Must be called before any draw of the frame. On error the previous
    /// program has already been discarded.
    pub fn sync<B>(
        &mut self,
        requested: VariantSelection,
        provider: &dyn ShaderSourceProvider,
        builder: &mut B,
    ) -> Result<SyncOutcome, ShaderError>
    where
        B: ProgramBuilder<Program = P>,
    {
        if self.compiled_selection() == Some(requested) {
            return Ok(SyncOutcome::Unchanged);
        }

        let previous = self.compiled.take().map(|(selection, _)| selection);
        match previous {
            Some(previous) => info!(%previous, %requested, "rebuilding shader program"),
            None => debug!(%requested, source = %provider.describe(), "building shader program"),
        }

        let program = match Self::build(requested, provider, builder) {
            Ok(program) => program,
            Err(e) => {
                error!(%requested, "shader program rebuild failed: {e}");
                return Err(e);
            }
        };

        self.compiled = Some((requested, program));
        self.rebuilds += 1;
        Ok(SyncOutcome::Rebuilt)
    }

    fn build<B>(
        selection: VariantSelection,
        provider: &dyn ShaderSourceProvider,
        builder: &mut B,
    ) -> Result<P, ShaderError>
    where
        B: ProgramBuilder<Program = P>,
    {
        let vertex = provider.source(ShaderStage::Vertex, selection.vertex)?;
        let fragment = provider.source(ShaderStage::Fragment, selection.fragment)?;
        builder.build(selection, &vertex, &fragment)
    }

    /// Drop the compiled program so the next `sync` rebuilds unconditionally.
    pub fn invalidate(&mut self) {
        self.compiled = None;
    }

    pub fn program(&self) -> Option<&P> {
        self.compiled.as_ref().map(|(_, program)| program)
    }

    pub fn compiled_selection(&self) -> Option<VariantSelection> {
        self.compiled.as_ref().map(|(selection, _)| *selection)
    }

    /// Successful builds since creation, the initial build included.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }
}

impl<P> Default for ShaderStateMachine<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use icoshade_common::ShaderVariant;

    use super::*;
    use crate::shader::EmbeddedShaders;

    /// Records every pair it was asked to build. Fails on demand.
    #[derive(Default)]
    struct RecordingBuilder {
        built: Vec<VariantSelection>,
        fail_link: bool,
    }

    impl ProgramBuilder for RecordingBuilder {
        type Program = (VariantSelection, String);

        fn build(
            &mut self,
            selection: VariantSelection,
            vertex_source: &str,
            fragment_source: &str,
        ) -> Result<Self::Program, ShaderError> {
            if self.fail_link {
                return Err(ShaderError::Link {
                    selection,
                    message: "interface mismatch".into(),
                });
            }
            self.built.push(selection);
            Ok((selection, format!("{}|{}", vertex_source.len(), fragment_source.len())))
        }
    }

    /// Provider that has no fragment source for one variant.
    struct MissingFragment(ShaderVariant);

    impl ShaderSourceProvider for MissingFragment {
        fn source(
            &self,
            stage: ShaderStage,
            variant: ShaderVariant,
        ) -> Result<Cow<'_, str>, ShaderError> {
            if stage == ShaderStage::Fragment && variant == self.0 {
                Err(ShaderError::SourceNotFound { stage, variant })
            } else {
                Ok(Cow::Borrowed("src"))
            }
        }

        fn describe(&self) -> String {
            "partial".into()
        }
    }

    fn pair(vertex: ShaderVariant, fragment: ShaderVariant) -> VariantSelection {
        VariantSelection::new(vertex, fragment)
    }

    #[test]
    fn first_sync_builds() {
        let mut machine = ShaderStateMachine::new();
        let mut builder = RecordingBuilder::default();
        let outcome = machine
            .sync(VariantSelection::default(), &EmbeddedShaders, &mut builder)
            .unwrap();
        assert_eq!(outcome, SyncOutcome::Rebuilt);
        assert_eq!(machine.rebuild_count(), 1);
        assert_eq!(machine.compiled_selection(), Some(VariantSelection::default()));
        assert!(machine.program().is_some());
    }

    #[test]
    fn unchanged_pair_does_not_rebuild() {
        let mut machine = ShaderStateMachine::new();
        let mut builder = RecordingBuilder::default();
        let requested = pair(ShaderVariant::Custom, ShaderVariant::Fireball);
        for _ in 0..10 {
            machine.sync(requested, &EmbeddedShaders, &mut builder).unwrap();
        }
        assert_eq!(machine.rebuild_count(), 1);
        assert_eq!(builder.built, vec![requested]);
    }

    #[test]
    fn vertex_toggle_rebuilds_twice_after_initial() {
        let mut machine = ShaderStateMachine::new();
        let mut builder = RecordingBuilder::default();
        let procedural = pair(ShaderVariant::Fireball, ShaderVariant::Lambert);
        let default = pair(ShaderVariant::Lambert, ShaderVariant::Lambert);

        machine.sync(procedural, &EmbeddedShaders, &mut builder).unwrap();
        assert_eq!(machine.rebuild_count(), 1);

        // Frame 1 switches to default, frame 2 holds, frame 3 switches back.
        let outcomes: Vec<_> = [default, default, procedural]
            .into_iter()
            .map(|requested| machine.sync(requested, &EmbeddedShaders, &mut builder).unwrap())
            .collect();

        assert_eq!(
            outcomes,
            vec![SyncOutcome::Rebuilt, SyncOutcome::Unchanged, SyncOutcome::Rebuilt]
        );
        assert_eq!(machine.rebuild_count(), 3);
        assert_eq!(builder.built, vec![procedural, default, procedural]);
    }

    #[test]
    fn rebuild_count_matches_differing_frames() {
        let mut machine = ShaderStateMachine::new();
        let mut builder = RecordingBuilder::default();
        let frames = [
            pair(ShaderVariant::Lambert, ShaderVariant::Lambert),
            pair(ShaderVariant::Lambert, ShaderVariant::Lambert),
            pair(ShaderVariant::Lambert, ShaderVariant::Custom),
            pair(ShaderVariant::Custom, ShaderVariant::Custom),
            pair(ShaderVariant::Custom, ShaderVariant::Custom),
            pair(ShaderVariant::Lambert, ShaderVariant::Lambert),
        ];
        let mut expected = 0;
        for requested in frames {
            if machine.compiled_selection() != Some(requested) {
                expected += 1;
            }
            machine.sync(requested, &EmbeddedShaders, &mut builder).unwrap();
        }
        assert_eq!(machine.rebuild_count(), expected);
        assert_eq!(expected, 4);
    }

    #[test]
    fn same_pair_after_failed_build_is_rebuilt() {
        let mut machine = ShaderStateMachine::new();
        let mut builder = RecordingBuilder::default();
        let lambert = VariantSelection::default();
        let custom = pair(ShaderVariant::Custom, ShaderVariant::Custom);

        machine.sync(lambert, &EmbeddedShaders, &mut builder).unwrap();

        builder.fail_link = true;
        machine.sync(custom, &EmbeddedShaders, &mut builder).unwrap_err();
        assert_eq!(machine.rebuild_count(), 1);

        // The previous frame asked for the same pair, but nothing is compiled.
        builder.fail_link = false;
        let outcome = machine.sync(custom, &EmbeddedShaders, &mut builder).unwrap();
        assert_eq!(outcome, SyncOutcome::Rebuilt);
        assert_eq!(machine.rebuild_count(), 2);
        assert_eq!(machine.compiled_selection(), Some(custom));
        assert_eq!(builder.built, vec![lambert, custom]);
    }

    #[test]
    fn fragment_only_change_rebuilds_from_both_sources() {
        let mut machine = ShaderStateMachine::new();
        let mut builder = RecordingBuilder::default();
        machine
            .sync(pair(ShaderVariant::Custom, ShaderVariant::Lambert), &EmbeddedShaders, &mut builder)
            .unwrap();
        machine
            .sync(pair(ShaderVariant::Custom, ShaderVariant::Fireball), &EmbeddedShaders, &mut builder)
            .unwrap();

        let (selection, _) = machine.program().unwrap();
        assert_eq!(selection.vertex, ShaderVariant::Custom);
        assert_eq!(selection.fragment, ShaderVariant::Fireball);
    }

    #[test]
    fn missing_source_discards_program() {
        let mut machine = ShaderStateMachine::new();
        let mut builder = RecordingBuilder::default();
        let provider = MissingFragment(ShaderVariant::Fireball);

        machine
            .sync(VariantSelection::default(), &provider, &mut builder)
            .unwrap();
        let err = machine
            .sync(pair(ShaderVariant::Lambert, ShaderVariant::Fireball), &provider, &mut builder)
            .unwrap_err();

        assert!(matches!(err, ShaderError::SourceNotFound { .. }));
        assert!(machine.program().is_none());
        assert_eq!(machine.compiled_selection(), None);
        assert_eq!(machine.rebuild_count(), 1);
    }

    #[test]
    fn link_failure_discards_program() {
        let mut machine = ShaderStateMachine::new();
        let mut builder = RecordingBuilder::default();
        machine
            .sync(VariantSelection::default(), &EmbeddedShaders, &mut builder)
            .unwrap();

        builder.fail_link = true;
        let err = machine
            .sync(pair(ShaderVariant::Custom, ShaderVariant::Custom), &EmbeddedShaders, &mut builder)
            .unwrap_err();
        assert!(matches!(err, ShaderError::Link { .. }));
        assert!(machine.program().is_none());
    }

    #[test]
    fn invalidate_forces_rebuild_of_same_pair() {
        let mut machine = ShaderStateMachine::new();
        let mut builder = RecordingBuilder::default();
        let requested = VariantSelection::default();
        machine.sync(requested, &EmbeddedShaders, &mut builder).unwrap();
        machine.invalidate();
        assert!(machine.program().is_none());
        let outcome = machine.sync(requested, &EmbeddedShaders, &mut builder).unwrap();
        assert_eq!(outcome, SyncOutcome::Rebuilt);
        assert_eq!(machine.rebuild_count(), 2);
    }
}
