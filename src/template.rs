//! # Render Templates
//!
//! Static registry of the sticker layouts the render collaborator knows.
//! The id must match the template id registered on the renderer side.
//!
//! | Id | Name |
//! |----|------|
//! | hofat-front | Ho FAT or.3 FRONT SIDE |
//! | hofat-or3-side-side | Ho FAT or.3 SIDE SIDE |

/// A render template: layout id, display name, preview image asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Template id as registered on the renderer.
    pub id: &'static str,
    /// Human-readable template name.
    pub name: &'static str,
    /// Preview image filename.
    pub image: &'static str,
}

static TEMPLATES: [Template; 2] = [Template::HOFAT_FRONT, Template::HOFAT_SIDE];

impl Template {
    pub const HOFAT_FRONT: Template = Template {
        id: "hofat-front",
        name: "Ho FAT or.3 FRONT SIDE",
        image: "hofat-or3-front-side.png",
    };

    pub const HOFAT_SIDE: Template = Template {
        id: "hofat-or3-side-side",
        name: "Ho FAT or.3 SIDE SIDE",
        image: "hofat-or3-side-side.png",
    };

    /// All registered templates.
    pub fn all() -> &'static [Template] {
        &TEMPLATES
    }

    /// Look a template up by its renderer id.
    pub fn by_id(id: &str) -> Option<&'static Template> {
        TEMPLATES.iter().find(|template| template.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_id() {
        let template = Template::by_id("hofat-front").unwrap();
        assert_eq!(template.name, "Ho FAT or.3 FRONT SIDE");
        assert!(Template::by_id("missing").is_none());
    }

    #[test]
    fn test_ids_unique() {
        for (i, a) in Template::all().iter().enumerate() {
            for b in &Template::all()[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
