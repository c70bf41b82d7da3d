use crate::stack::FrameworkId;

/// How the final `CMD` is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartDirective {
    /// Literal exec-form instruction
    Fixed(&'static str),
    /// Exec form built from the resolved start command
    FromStartCommand,
}

/// Closing segment of the Dockerfile: exposed port, extra env and start directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trailer {
    pub port: u16,
    pub env: &'static [&'static str],
    pub start: StartDirective,
}

pub const NPM_START: &str = r#"CMD ["npm", "start"]"#;

const NUXT_TRAILER: Trailer = Trailer {
    port: 3000,
    env: &["HOST=0.0.0.0"],
    start: StartDirective::Fixed(NPM_START),
};

const NEXT_TRAILER: Trailer = Trailer {
    port: 3000,
    env: &[],
    start: StartDirective::Fixed(NPM_START),
};

const DEFAULT_TRAILER: Trailer = Trailer {
    port: 8080,
    env: &[],
    start: StartDirective::FromStartCommand,
};

pub fn trailer_for(framework: FrameworkId) -> &'static Trailer {
    match framework {
        FrameworkId::Nuxt => &NUXT_TRAILER,
        FrameworkId::Next => &NEXT_TRAILER,
        FrameworkId::Vue | FrameworkId::React | FrameworkId::Node | FrameworkId::Unknown => {
            &DEFAULT_TRAILER
        }
    }
}
