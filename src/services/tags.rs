use serde::Serialize;

use crate::domain::tag::{Tag, TagWithProducts};
use crate::forms::tags::{AddTagForm, EditTagForm};
use crate::repository::{TagReader, TagWriter};
use crate::services::{MessageResponse, ServiceError, ServiceResult};

/// Response body returned after a tag update.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TagUpdateOutcome {
    pub message: String,
    pub updated_tag: Tag,
}

/// Lists every tag with the products it is attached to.
pub fn list_tags<R>(repo: &R) -> ServiceResult<Vec<TagWithProducts>>
where
    R: TagReader + ?Sized,
{
    repo.list_tags().map_err(ServiceError::from)
}

/// Loads a single tag with the products it is attached to.
pub fn get_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<TagWithProducts>
where
    R: TagReader + ?Sized,
{
    repo.get_tag_by_id(tag_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a new tag.
pub fn create_tag<R>(repo: &R, form: AddTagForm) -> ServiceResult<Tag>
where
    R: TagWriter + ?Sized,
{
    let new_tag = form
        .into_new_tag()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    repo.create_tag(&new_tag).map_err(ServiceError::from)
}

/// Applies a partial update to an existing tag.
pub fn update_tag<R>(repo: &R, tag_id: i32, form: EditTagForm) -> ServiceResult<TagUpdateOutcome>
where
    R: TagWriter + ?Sized,
{
    let updates = form
        .into_update_tag()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let updated_tag = repo
        .update_tag(tag_id, &updates)
        .map_err(ServiceError::from)?;

    Ok(TagUpdateOutcome {
        message: "Tag updated successfully".to_string(),
        updated_tag,
    })
}

/// Deletes a tag. Its product associations are removed by the store.
pub fn delete_tag<R>(repo: &R, tag_id: i32) -> ServiceResult<MessageResponse>
where
    R: TagWriter + ?Sized,
{
    repo.delete_tag(tag_id).map_err(ServiceError::from)?;

    Ok(MessageResponse::new("Tag deleted successfully"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::{MockTagReader, MockTagWriter};

    fn sample_tag(id: i32, name: Option<&str>) -> Tag {
        Tag {
            id,
            tag_name: name.map(str::to_string),
        }
    }

    #[test]
    fn list_tags_returns_repository_rows() {
        let mut repo = MockTagReader::new();

        repo.expect_list_tags().times(1).returning(|| {
            Ok(vec![TagWithProducts::new(
                sample_tag(1, Some("rock music")),
                Vec::new(),
            )])
        });

        let tags = list_tags(&repo).expect("expected success");

        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].tag.tag_name.as_deref(), Some("rock music"));
    }

    #[test]
    fn get_tag_maps_missing_row_to_not_found() {
        let mut repo = MockTagReader::new();

        repo.expect_get_tag_by_id().returning(|_| Ok(None));

        assert!(matches!(get_tag(&repo, 8), Err(ServiceError::NotFound)));
    }

    #[test]
    fn create_tag_persists_sanitized_name() {
        let mut repo = MockTagWriter::new();

        repo.expect_create_tag()
            .times(1)
            .withf(|new_tag| {
                assert_eq!(new_tag.tag_name.as_deref(), Some("pop music"));
                true
            })
            .returning(|_| Ok(sample_tag(3, Some("pop music"))));

        let form = AddTagForm {
            tag_name: Some(" pop   music ".to_string()),
        };

        let created = create_tag(&repo, form).expect("expected success");

        assert_eq!(created.id, 3);
    }

    #[test]
    fn update_tag_returns_updated_row() {
        let mut repo = MockTagWriter::new();

        repo.expect_update_tag()
            .times(1)
            .withf(|tag_id, updates| {
                assert_eq!(*tag_id, 5);
                assert_eq!(updates.tag_name, Some(Some("blue".to_string())));
                true
            })
            .returning(|_, _| Ok(sample_tag(5, Some("blue"))));

        let form = EditTagForm {
            tag_name: Some(Some("blue".to_string())),
        };

        let outcome = update_tag(&repo, 5, form).expect("expected success");

        assert_eq!(outcome.message, "Tag updated successfully");
        assert_eq!(outcome.updated_tag, sample_tag(5, Some("blue")));
    }

    #[test]
    fn update_tag_reports_not_found() {
        let mut repo = MockTagWriter::new();

        repo.expect_update_tag()
            .returning(|_, _| Err(RepositoryError::NotFound));

        assert!(matches!(
            update_tag(&repo, 77, EditTagForm::default()),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn delete_tag_acknowledges_success() {
        let mut repo = MockTagWriter::new();

        repo.expect_delete_tag()
            .times(1)
            .withf(|tag_id| *tag_id == 4)
            .returning(|_| Ok(()));

        let ack = delete_tag(&repo, 4).expect("expected success");

        assert_eq!(ack.message, "Tag deleted successfully");
    }
}
