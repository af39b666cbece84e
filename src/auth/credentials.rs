// Opaque authentication material tied to one connection attempt. Produced and
// validated by the authentication subsystem, read-only here.
#[derive(Clone, Debug)]
pub struct Credentials {
    username: Option<String>,
    secret: Option<String>,
    remote_address: Option<String>,
}

impl Credentials {
    pub fn new(
        username: Option<String>,
        secret: Option<String>,
        remote_address: Option<String>,
    ) -> Self {
        Self {
            username,
            secret,
            remote_address,
        }
    }

    pub fn get_username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn get_secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    pub fn get_remote_address(&self) -> Option<&str> {
        self.remote_address.as_deref()
    }
}
