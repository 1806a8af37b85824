use crate::view::ViewState;

/// Query parameter values implied by a view state
///
/// An open overlay is addressed by the project parameter alone; otherwise
/// the view parameter names the primary view and home leaves it absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlProjection {
    pub view: Option<String>,
    pub project: Option<String>,
}

impl UrlProjection {
    pub fn of(state: &ViewState) -> Self {
        match &state.overlay {
            Some(payload) => Self {
                view: None,
                project: Some(payload.id.clone()),
            },
            None => Self {
                view: state.primary.param().map(str::to_string),
                project: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{PrimaryView, ProjectPayload};

    #[test]
    fn test_home_projects_to_nothing() {
        let projection = UrlProjection::of(&ViewState::default());
        assert_eq!(projection.view, None);
        assert_eq!(projection.project, None);
    }

    #[test]
    fn test_panel_views() {
        let state = ViewState {
            primary: PrimaryView::About,
            overlay: None,
        };
        assert_eq!(UrlProjection::of(&state).view.as_deref(), Some("about"));
    }

    #[test]
    fn test_overlay_clears_view_param() {
        let state = ViewState {
            primary: PrimaryView::Projects,
            overlay: Some(ProjectPayload::with_id("card-7")),
        };
        let projection = UrlProjection::of(&state);
        assert_eq!(projection.view, None);
        assert_eq!(projection.project.as_deref(), Some("card-7"));
    }
}
