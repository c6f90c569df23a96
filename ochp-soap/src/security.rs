//! WS-Security `UsernameToken` header
//!
//! Clearing houses authenticate every call with a username and plain-text
//! password carried in the SOAP header:
//!
//! ```xml
//! <wsse:Security xmlns:wsse="http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-secext-1.0.xsd">
//!   <wsse:UsernameToken>
//!     <wsse:Username>user</wsse:Username>
//!     <wsse:Password Type="...#PasswordText">secret</wsse:Password>
//!   </wsse:UsernameToken>
//! </wsse:Security>
//! ```

use ochp_core::{BuildElement, OchpError, OchpResult};
use std::fmt;
use xmltree::{Element, Namespace};

pub const WSSE_NS: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-secext-1.0.xsd";
pub const WSSE_PREFIX: &str = "wsse";
pub const PASSWORD_TEXT: &str = "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-username-token-profile-1.0#PasswordText";

fn wsse_element(name: &str) -> Element {
    let mut namespaces = Namespace::empty();
    namespaces.put(WSSE_PREFIX, WSSE_NS);

    let mut element = Element::new(name);
    element.prefix = Some(WSSE_PREFIX.to_string());
    element.namespace = Some(WSSE_NS.to_string());
    element.namespaces = Some(namespaces);
    element
}

fn wsse_child<'a>(element: &'a Element, name: &str) -> OchpResult<&'a Element> {
    element
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .find(|child| child.name == name && child.namespace.as_deref() == Some(WSSE_NS))
        .ok_or_else(|| OchpError::MissingElement(format!("{}/{}", element.name, name)))
}

/// Credentials sent with every request
#[derive(Clone, PartialEq, Eq)]
pub struct UsernameToken {
    username: String,
    password: String,
}

impl UsernameToken {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Whether the header element is a WS-Security block
    pub fn is_security_header(element: &Element) -> bool {
        element.name == "Security" && element.namespace.as_deref() == Some(WSSE_NS)
    }

    /// Build the `wsse:Security` header entry
    pub fn to_header(&self) -> Element {
        let password = wsse_element("Password")
            .with_attribute("Type", PASSWORD_TEXT)
            .with_text(&self.password);
        let token = wsse_element("UsernameToken")
            .with_child(wsse_element("Username").with_text(&self.username))
            .with_child(password);
        wsse_element("Security").with_child(token)
    }

    /// Read the credentials from a `wsse:Security` header entry
    pub fn from_header(element: &Element) -> OchpResult<Self> {
        if !Self::is_security_header(element) {
            return Err(OchpError::UnexpectedElement {
                expected: "Security".to_string(),
                actual: element.name.clone(),
            });
        }

        let token = wsse_child(element, "UsernameToken")?;
        let text = |name: &str| -> OchpResult<String> {
            Ok(wsse_child(token, name)?
                .get_text()
                .map(|text| text.trim().to_string())
                .unwrap_or_default())
        };

        let password_element = wsse_child(token, "Password")?;
        if let Some(kind) = password_element.attributes.get("Type") {
            if kind != PASSWORD_TEXT {
                return Err(OchpError::Soap(format!("unsupported password type '{}'", kind)));
            }
        }

        Ok(Self {
            username: text("Username")?,
            password: text("Password")?,
        })
    }
}

impl fmt::Debug for UsernameToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UsernameToken")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
