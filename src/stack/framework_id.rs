crate::define_id_enum! {
    /// Framework a project is classified as
    FrameworkId {
        Nuxt => "nuxt" : "Nuxt",
        Next => "next" : "Next.js" | "nextjs",
        Vue => "vue" : "Vue CLI" | "vue-cli",
        React => "react" : "Create React App" | "create-react-app",
        Node => "node" : "Node.js" | "express",
        Unknown => "unknown" : "Unknown",
    }
}

impl FrameworkId {
    /// Build command used when the manifest declares no `build` script
    pub fn default_build_command(&self) -> Option<&'static str> {
        match self {
            FrameworkId::Vue => Some("vue-cli-service build"),
            FrameworkId::React => Some("react-scripts build"),
            FrameworkId::Nuxt => Some("nuxt build"),
            FrameworkId::Next => Some("next build"),
            FrameworkId::Node | FrameworkId::Unknown => None,
        }
    }
}

impl Default for FrameworkId {
    fn default() -> Self {
        FrameworkId::Unknown
    }
}
