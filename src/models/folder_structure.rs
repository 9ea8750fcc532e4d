//! Standard Folder Layout
//!
//! The folder tree created for every new user: a fixed `User` root with the
//! Inbox/Journal/Projects/People top level and the project areas under
//! Projects. The layout is plain data; `NodeService::initialize_user_folders`
//! walks it and creates each folder through the normal containment write
//! path so both indexes stay consistent from the first node on.

use crate::models::node::ROOT_NODE_ID;

/// Well-known folder captions.
pub struct FolderNames;

impl FolderNames {
    pub const USER: &'static str = "User";
    pub const INBOX: &'static str = "Inbox";
    pub const JOURNAL: &'static str = "Journal";
    pub const PROJECTS: &'static str = "Projects";
    pub const BUSINESS: &'static str = "Business";
    pub const PRODUCT: &'static str = "Product";
    pub const HOME: &'static str = "Home";
    pub const MONEY: &'static str = "Money";
    pub const LIFE: &'static str = "Life";
    pub const BODY: &'static str = "Body";
    pub const SOCIAL: &'static str = "Social";
    pub const PEOPLE: &'static str = "People";
}

/// One folder in the bootstrap layout.
#[derive(Debug, Clone)]
pub struct SetupFolder {
    pub name: &'static str,
    pub children: Vec<SetupFolder>,
}

impl SetupFolder {
    fn leaf(name: &'static str) -> Self {
        Self {
            name,
            children: Vec::new(),
        }
    }
}

/// Fixed ID of the root folder node.
pub fn root_node_id() -> &'static str {
    ROOT_NODE_ID
}

/// The standard per-user folder tree.
pub fn standard_setup() -> SetupFolder {
    SetupFolder {
        name: FolderNames::USER,
        children: vec![
            SetupFolder::leaf(FolderNames::INBOX),
            SetupFolder::leaf(FolderNames::JOURNAL),
            SetupFolder {
                name: FolderNames::PROJECTS,
                children: vec![
                    SetupFolder::leaf(FolderNames::BUSINESS),
                    SetupFolder::leaf(FolderNames::PRODUCT),
                    SetupFolder::leaf(FolderNames::HOME),
                    SetupFolder::leaf(FolderNames::MONEY),
                    SetupFolder::leaf(FolderNames::LIFE),
                    SetupFolder::leaf(FolderNames::BODY),
                    SetupFolder::leaf(FolderNames::SOCIAL),
                ],
            },
            SetupFolder::leaf(FolderNames::PEOPLE),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_setup_shape() {
        let setup = standard_setup();
        assert_eq!(setup.name, FolderNames::USER);
        assert_eq!(setup.children.len(), 4);

        let projects = setup
            .children
            .iter()
            .find(|f| f.name == FolderNames::PROJECTS)
            .unwrap();
        assert_eq!(projects.children.len(), 7);
    }
}
