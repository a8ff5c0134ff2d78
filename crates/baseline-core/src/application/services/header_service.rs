//! License heading rendering use case.

use tracing::{debug, instrument};

use crate::application::ports::TemplateStore;
use crate::domain::{render_header, LicenseKind, LicenseParameters, LineEnding, RenderedHeader};
use crate::error::BaselineResult;

/// Renders license headings from stored templates.
pub struct HeaderService {
    store: Box<dyn TemplateStore>,
}

impl HeaderService {
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Render the heading for `kind` using the line ending convention of
    /// the machine running the tool.
    #[instrument(skip_all, fields(kind = %kind))]
    pub fn render(
        &self,
        kind: LicenseKind,
        params: &LicenseParameters,
    ) -> BaselineResult<RenderedHeader> {
        self.render_with_line_ending(kind, params, LineEnding::current())
    }

    /// Render with an explicit line ending. The template is fetched per
    /// call, so store overrides take effect without restarting.
    pub fn render_with_line_ending(
        &self,
        kind: LicenseKind,
        params: &LicenseParameters,
        line_ending: LineEnding,
    ) -> BaselineResult<RenderedHeader> {
        let template = self.store.template_for(kind)?;
        debug!(
            template_len = template.len(),
            line_ending = %line_ending,
            "Template resolved"
        );
        Ok(render_header(&template, params, line_ending))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ApplicationError;
    use crate::error::BaselineError;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        Store {}

        impl TemplateStore for Store {
            fn template_for(&self, kind: LicenseKind) -> BaselineResult<String>;
        }
    }

    fn params() -> LicenseParameters {
        LicenseParameters::new("charted-server", "Free OSS registry", "2026")
    }

    #[test]
    fn renders_via_the_stored_template() {
        let mut store = MockStore::new();
        store
            .expect_template_for()
            .with(eq(LicenseKind::Mit))
            .times(1)
            .returning(|_| Ok("{{ Name }} ({{ CurrentYear }}): {{ Description }}".to_string()));

        let service = HeaderService::new(Box::new(store));
        let rendered = service
            .render_with_line_ending(LicenseKind::Mit, &params(), LineEnding::Lf)
            .unwrap();

        assert_eq!(
            rendered.as_str(),
            "charted-server (2026): Free OSS registry\n"
        );
    }

    #[test]
    fn template_is_fetched_on_every_render() {
        let mut store = MockStore::new();
        store
            .expect_template_for()
            .times(2)
            .returning(|_| Ok("{{ Name }}".to_string()));

        let service = HeaderService::new(Box::new(store));
        for _ in 0..2 {
            service
                .render_with_line_ending(LicenseKind::Apache, &params(), LineEnding::Lf)
                .unwrap();
        }
    }

    #[test]
    fn store_failure_propagates() {
        let mut store = MockStore::new();
        store.expect_template_for().returning(|kind| {
            Err(ApplicationError::TemplateNotFound {
                kind: kind.as_str().to_string(),
            }
            .into())
        });

        let service = HeaderService::new(Box::new(store));
        let err = service
            .render_with_line_ending(LicenseKind::Apache, &params(), LineEnding::Lf)
            .unwrap_err();

        assert!(matches!(
            err,
            BaselineError::Application(ApplicationError::TemplateNotFound { .. })
        ));
    }
}
