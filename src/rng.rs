use rand::{Rng, RngCore};
use uuid::{Uuid, Variant, Version};

pub fn make_uuid<R: Rng>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.random())
        .with_variant(Variant::RFC4122)
        .with_version(Version::Random)
        .into_uuid()
}

pub fn make_secret<R: RngCore>(rng: &mut R, size: usize) -> Vec<u8> {
    let mut secret = vec![0; size];
    rng.fill_bytes(secret.as_mut_slice());
    secret
}
