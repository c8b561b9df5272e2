//! Named session scenarios: a list of actions to replay and the state the
//! session must end in.
use thiserror::Error;
use tryloom_core::{
    Action, Catalog, Category, ImageRef, IntakeOutcome, ProductId, SAMPLE_IMAGES, ScreenKind,
    Session,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpectationError {
    #[error("expected the {expected:?} screen, found {found:?}")]
    WrongScreen {
        expected: ScreenKind,
        found: ScreenKind,
    },
    #[error("{0}")]
    Mismatch(String),
    #[error("invariant broken after step {step} ({action}): {detail}")]
    Invariant {
        step: usize,
        action: String,
        detail: String,
    },
    #[error("iteration {iteration} ended in a different state than iteration 1")]
    Diverged { iteration: usize },
    #[error("scenario needs data the catalog does not have: {0}")]
    MissingData(String),
}

pub type Steps = Result<Vec<Action>, ExpectationError>;
pub type Check = Result<(), ExpectationError>;

#[derive(Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub steps: fn(&Catalog) -> Steps,
    pub expect: fn(&Session, &Catalog) -> Check,
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario").field("name", &self.name).finish()
    }
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "smoke",
        description: "Start the camera from home and stream the fallback picker",
        steps: smoke_steps,
        expect: smoke_expect,
    },
    Scenario {
        name: "gallery-eyewear",
        description: "Open the eyewear gallery and list its six frames in order",
        steps: gallery_eyewear_steps,
        expect: gallery_eyewear_expect,
    },
    Scenario {
        name: "sample-upload",
        description: "Pick a sample photo from the upload dialog",
        steps: sample_upload_steps,
        expect: sample_upload_expect,
    },
    Scenario {
        name: "cancelled-upload",
        description: "Close the file picker without a file",
        steps: cancelled_upload_steps,
        expect: cancelled_upload_expect,
    },
    Scenario {
        name: "recording-toggle",
        description: "Toggle recording twice and land where we started",
        steps: recording_toggle_steps,
        expect: recording_toggle_expect,
    },
    Scenario {
        name: "try-on-selection",
        description: "Try on a clothing item straight from its gallery",
        steps: try_on_steps,
        expect: try_on_expect,
    },
    Scenario {
        name: "home-reset",
        description: "Build up a busy camera session and return home",
        steps: home_reset_steps,
        expect: home_reset_expect,
    },
];

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.name, s.description)).collect()
}

#[must_use]
pub fn get_scenario(name: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.name == name)
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Expand the `--scenarios` argument; `all` stands for every known scenario.
pub fn expand_scenarios(arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for scenario in SCENARIOS {
            if !scenarios.iter().any(|s| s == scenario.name) {
                scenarios.push(scenario.name.to_string());
            }
        }
    }
    scenarios
}

fn expect_screen(session: &Session, expected: ScreenKind) -> Check {
    let found = session.current_screen();
    if found == expected {
        Ok(())
    } else {
        Err(ExpectationError::WrongScreen { expected, found })
    }
}

fn ensure(ok: bool, message: impl FnOnce() -> String) -> Check {
    if ok {
        Ok(())
    } else {
        Err(ExpectationError::Mismatch(message()))
    }
}

fn nth_product(
    catalog: &Catalog,
    category: Category,
    index: usize,
) -> Result<ProductId, ExpectationError> {
    catalog
        .filter(Some(category))
        .get(index)
        .map(|p| p.id.clone())
        .ok_or_else(|| ExpectationError::MissingData(format!("{category} item #{index}")))
}

fn ids(products: &[&tryloom_core::Product]) -> Vec<ProductId> {
    products.iter().map(|p| p.id.clone()).collect()
}

fn smoke_steps(_: &Catalog) -> Steps {
    Ok(vec![Action::StartCamera])
}

fn smoke_expect(session: &Session, catalog: &Catalog) -> Check {
    expect_screen(session, ScreenKind::Camera)?;
    ensure(session.is_streaming(), || "camera is not streaming".into())?;
    ensure(session.uploaded_image().is_none(), || "unexpected image".into())?;
    let offered = ids(&session.visible_products(catalog));
    let prefix = ids(&catalog.products.iter().take(6).collect::<Vec<_>>());
    ensure(offered == prefix, || {
        format!("picker offered {offered:?}, expected the first six items")
    })
}

fn gallery_eyewear_steps(_: &Catalog) -> Steps {
    Ok(vec![Action::OpenGallery(Category::Eyewear)])
}

fn gallery_eyewear_expect(session: &Session, catalog: &Catalog) -> Check {
    expect_screen(session, ScreenKind::Gallery)?;
    let shown = session.visible_products(catalog);
    ensure(shown.len() == 6, || format!("{} eyewear items shown", shown.len()))?;
    ensure(
        shown.iter().all(|p| p.category == Category::Eyewear),
        || "non-eyewear item in the eyewear gallery".into(),
    )?;
    let expected = ids(
        &catalog
            .products
            .iter()
            .filter(|p| p.category == Category::Eyewear)
            .collect::<Vec<_>>(),
    );
    ensure(ids(&shown) == expected, || "gallery order differs from the catalog".into())
}

fn sample_upload_steps(_: &Catalog) -> Steps {
    let picked = IntakeOutcome::Loaded(ImageRef::sample(&SAMPLE_IMAGES[0]));
    let mut steps = vec![Action::OpenUpload];
    steps.extend(picked.into_action());
    Ok(steps)
}

fn sample_upload_expect(session: &Session, _: &Catalog) -> Check {
    expect_screen(session, ScreenKind::Camera)?;
    ensure(!session.is_streaming(), || "camera streams over the photo".into())?;
    ensure(!session.upload_open, || "upload dialog still open".into())?;
    ensure(
        session.uploaded_image().is_some_and(ImageRef::is_sample),
        || "sample photo not shown".into(),
    )
}

fn cancelled_upload_steps(_: &Catalog) -> Steps {
    let mut steps = vec![Action::OpenUpload];
    steps.extend(IntakeOutcome::Cancelled.into_action());
    steps.push(Action::CloseUpload);
    Ok(steps)
}

fn cancelled_upload_expect(session: &Session, _: &Catalog) -> Check {
    ensure(*session == Session::default(), || {
        format!("cancelled pick changed the session: {session:?}")
    })
}

fn recording_toggle_steps(_: &Catalog) -> Steps {
    Ok(vec![
        Action::StartCamera,
        Action::ToggleRecording,
        Action::ToggleRecording,
    ])
}

fn recording_toggle_expect(session: &Session, catalog: &Catalog) -> Check {
    let baseline = Session::default().reduce(catalog, Action::StartCamera);
    ensure(*session == baseline, || {
        "double toggle did not restore the camera state".into()
    })
}

fn try_on_steps(catalog: &Catalog) -> Steps {
    Ok(vec![
        Action::OpenGallery(Category::Clothes),
        Action::TryOn(nth_product(catalog, Category::Clothes, 2)?),
    ])
}

fn try_on_expect(session: &Session, catalog: &Catalog) -> Check {
    expect_screen(session, ScreenKind::Camera)?;
    let expected = nth_product(catalog, Category::Clothes, 2)?;
    ensure(session.selected_product() == Some(&expected), || {
        format!("selected {:?}, expected {expected}", session.selected_product())
    })?;
    ensure(session.selected_category() == Some(Category::Clothes), || {
        "camera lost the gallery category".into()
    })
}

fn home_reset_steps(catalog: &Catalog) -> Steps {
    Ok(vec![
        Action::OpenGallery(Category::Makeup),
        Action::TryOn(nth_product(catalog, Category::Makeup, 0)?),
        Action::ToggleRecording,
        Action::ImageLoaded(ImageRef::sample(&SAMPLE_IMAGES[2])),
        Action::OpenUpload,
        Action::NavigateHome,
    ])
}

fn home_reset_expect(session: &Session, _: &Catalog) -> Check {
    expect_screen(session, ScreenKind::Home)?;
    ensure(session.selected_category().is_none(), || "category kept".into())?;
    ensure(session.selected_product().is_none(), || "product kept".into())?;
    ensure(session.uploaded_image().is_none(), || "image kept".into())?;
    ensure(*session == Session::default(), || "session not reset".into())
}

/// Properties every reachable session must satisfy.
///
/// # Errors
///
/// Returns a description of the first broken property.
pub fn check_invariants(session: &Session, catalog: &Catalog) -> Result<(), String> {
    if let Some(id) = session.selected_product()
        && !session.visible_products(catalog).iter().any(|p| &p.id == id)
    {
        return Err(format!("selected product {id} is not offered on this screen"));
    }
    if session.is_recording() && session.current_screen() != ScreenKind::Camera {
        return Err("recording outside the camera".to_string());
    }
    if session.is_streaming() && session.uploaded_image().is_some() {
        return Err("streaming while a photo is shown".to_string());
    }
    if session.current_screen() == ScreenKind::Home
        && (session.selected_category().is_some() || session.uploaded_image().is_some())
    {
        return Err("home screen carries selection state".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(scenario: &Scenario, catalog: &Catalog) -> Session {
        (scenario.steps)(catalog)
            .expect("steps build")
            .into_iter()
            .fold(Session::default(), |s, a| s.reduce(catalog, a))
    }

    #[test]
    fn every_scenario_passes_against_the_bundled_catalog() {
        let catalog = Catalog::load_from_static();
        for scenario in SCENARIOS {
            let session = replay(scenario, &catalog);
            assert_eq!((scenario.expect)(&session, &catalog), Ok(()), "{}", scenario.name);
            assert_eq!(check_invariants(&session, &catalog), Ok(()), "{}", scenario.name);
        }
    }

    #[test]
    fn expectations_catch_wrong_end_states() {
        let catalog = Catalog::load_from_static();
        let home = Session::default();
        assert!(matches!(
            smoke_expect(&home, &catalog),
            Err(ExpectationError::WrongScreen { .. })
        ));
        assert!(gallery_eyewear_expect(&home, &catalog).is_err());
        let camera = home.reduce(&catalog, Action::StartCamera);
        assert!(home_reset_expect(&camera, &catalog).is_err());
    }

    #[test]
    fn empty_catalog_reports_missing_data() {
        let empty = Catalog::empty();
        assert!(matches!(
            try_on_steps(&empty),
            Err(ExpectationError::MissingData(_))
        ));
    }

    #[test]
    fn all_expands_to_every_scenario_once() {
        let expanded = expand_scenarios("smoke, all");
        assert_eq!(expanded.len(), SCENARIOS.len());
        assert_eq!(expanded[0], "smoke");
        assert_eq!(expand_scenarios(" smoke ,,home-reset"), ["smoke", "home-reset"]);
    }

    #[test]
    fn lookup_and_listing_agree() {
        for (name, description) in list_scenarios() {
            let scenario = get_scenario(name).expect("listed scenario exists");
            assert_eq!(scenario.description, description);
        }
        assert!(get_scenario("nope").is_none());
    }
}
