use super::prelude::*;

pub fn get_place<R>(repo: &R, id: &str) -> Result<Place>
where
    R: PlaceRepo,
{
    repo.get_place(id)?.ok_or(Error::PlaceNotFound)
}
