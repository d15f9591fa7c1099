/// A portfolio entry shown on the projects page.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
}

/// Placeholder entries until projects are backed by real content.
pub const PROJECTS: [Project; 3] = [
    Project {
        name: "Project 1",
        description: "Description of Project 1",
    },
    Project {
        name: "Project 2",
        description: "Description of Project 2",
    },
    Project {
        name: "Project 3",
        description: "Description of Project 3",
    },
];
