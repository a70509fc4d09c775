use super::{mutation::Mutation, prelude::*};

/// Delete a place and all of its bookmarks.
pub fn delete_place<R>(repo: &R, id: &str) -> Result<Mutation<Place>>
where
    R: PlaceRepo,
{
    log::debug!("Deleting place {id}");
    let place = repo.delete_place(id)?.ok_or(Error::PlaceNotFound)?;
    Ok(Mutation::new("The place has been deleted.", place))
}
