//! Presentation shell: the welcome → login → dashboard screen flow.
//!
//! Rendering lives elsewhere (the `viz` binary); this module only owns the
//! screen state, the logged-in profile and the last simulation result.

use std::fmt;

use tracing::{debug, info};

use crate::error::{LoginError, Result};
use crate::sim::{simulate, LaunchParams, SimulationResult};

// ---------------------------------------------------------------------------
// User profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    AerospaceEngineer,
    DataAnalyst,
    StudentResearcher,
    ProjectManager,
    Other,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::AerospaceEngineer,
        Role::DataAnalyst,
        Role::StudentResearcher,
        Role::ProjectManager,
        Role::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Role::AerospaceEngineer => "Aerospace Engineer",
            Role::DataAnalyst => "Data Analyst",
            Role::StudentResearcher => "Student/Researcher",
            Role::ProjectManager => "Project Manager",
            Role::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    CostAnalysis,
    PayloadOptimization,
    FuelEfficiency,
    LaunchSuccessStudy,
}

impl Focus {
    pub const ALL: [Focus; 4] = [
        Focus::CostAnalysis,
        Focus::PayloadOptimization,
        Focus::FuelEfficiency,
        Focus::LaunchSuccessStudy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Focus::CostAnalysis => "Cost Analysis",
            Focus::PayloadOptimization => "Payload Optimization",
            Focus::FuelEfficiency => "Fuel Efficiency",
            Focus::LaunchSuccessStudy => "Launch Success Study",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Focus::CostAnalysis => {
                "Analyze mission costs, budget distributions, and financial efficiency across \
                 mission types, vehicles, and payloads."
            }
            Focus::PayloadOptimization => {
                "Investigate payload mass constraints and payload-to-fuel ratios for different \
                 mission profiles."
            }
            Focus::FuelEfficiency => {
                "Examine fuel consumption patterns and how drag, thrust, and mass affect fuel \
                 requirements."
            }
            Focus::LaunchSuccessStudy => {
                "Study the factors that separate successful launches from failures across types \
                 and vehicles."
            }
        }
    }

    /// Dashboard pages worth visiting first for this focus.
    pub fn recommended_pages(self) -> [Page; 2] {
        match self {
            Focus::CostAnalysis => [Page::MissionData, Page::Insights],
            Focus::PayloadOptimization => [Page::PhysicsSim, Page::Insights],
            Focus::FuelEfficiency => [Page::PhysicsSim, Page::MissionData],
            Focus::LaunchSuccessStudy => [Page::MissionData, Page::Insights],
        }
    }
}

macro_rules! display_label {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    )*};
}

display_label!(Role, Focus, Page);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub role: Role,
    pub focus: Focus,
}

impl UserProfile {
    /// Validate the login form: trimmed name non-empty, role chosen.
    pub fn from_form(
        name: &str,
        role: Option<Role>,
        focus: Focus,
    ) -> std::result::Result<Self, LoginError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LoginError::MissingName);
        }
        let role = role.ok_or(LoginError::MissingRole)?;
        Ok(Self { name: name.to_string(), role, focus })
    }
}

// ---------------------------------------------------------------------------
// Screens
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    MissionData,
    PhysicsSim,
    Insights,
    About,
}

impl Page {
    pub const ALL: [Page; 5] =
        [Page::Home, Page::MissionData, Page::PhysicsSim, Page::Insights, Page::About];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::MissionData => "Mission Data",
            Page::PhysicsSim => "Physics Sim",
            Page::Insights => "Insights",
            Page::About => "About",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Welcome,
    Login,
    Dashboard(Page),
}

// ---------------------------------------------------------------------------
// Shell state machine
// ---------------------------------------------------------------------------

/// Transitions return `false` and leave the state untouched when they do
/// not apply to the current screen.
#[derive(Debug, Default)]
pub struct Shell {
    screen: Screen,
    user: Option<UserProfile>,
    last_result: Option<SimulationResult>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn last_result(&self) -> Option<&SimulationResult> {
        self.last_result.as_ref()
    }

    /// Welcome → Login.
    pub fn begin(&mut self) -> bool {
        self.go(Screen::Welcome, Screen::Login)
    }

    /// Login → Welcome.
    pub fn back(&mut self) -> bool {
        self.go(Screen::Login, Screen::Welcome)
    }

    /// Login → Dashboard(Home) once the form validates. `Ok(false)` when
    /// not on the login screen.
    pub fn login(&mut self, name: &str, role: Option<Role>, focus: Focus) -> Result<bool> {
        if self.screen != Screen::Login {
            debug!(screen = ?self.screen, "login ignored outside the login screen");
            return Ok(false);
        }
        let profile = UserProfile::from_form(name, role, focus)?;
        info!(name = %profile.name, role = %profile.role, focus = %profile.focus, "user logged in");
        self.user = Some(profile);
        self.screen = Screen::Dashboard(Page::Home);
        Ok(true)
    }

    /// Switch dashboard page.
    pub fn navigate(&mut self, page: Page) -> bool {
        match self.screen {
            Screen::Dashboard(_) => {
                self.screen = Screen::Dashboard(page);
                true
            }
            _ => false,
        }
    }

    /// Back to Welcome, dropping the profile and the last result.
    pub fn logout(&mut self) -> bool {
        if !matches!(self.screen, Screen::Dashboard(_)) {
            return false;
        }
        if let Some(user) = self.user.take() {
            info!(name = %user.name, "user logged out");
        }
        self.last_result = None;
        self.screen = Screen::Welcome;
        true
    }

    /// Run the simulator and keep the result for display, replacing any
    /// earlier one. A rejected parameter set leaves the previous result.
    pub fn run_simulation(&mut self, params: &LaunchParams) -> Result<&SimulationResult> {
        let result = simulate(params)?;
        info!(
            max_alt_km = result.max_altitude_km(),
            max_vel = result.max_velocity,
            burnout = result.burnout_time_step(),
            twr = result.twr,
            "simulation complete"
        );
        Ok(self.last_result.insert(result))
    }

    fn go(&mut self, from: Screen, to: Screen) -> bool {
        if self.screen == from {
            self.screen = to;
            true
        } else {
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
