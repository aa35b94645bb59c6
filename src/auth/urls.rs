// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Casting Catalog API

//! Login/logout URL construction.
//!
//! Pure string building per the provider's documented query-parameter
//! contract; no network access or verification involved. Lives here because
//! the URLs share the provider configuration with the verifier.

use crate::config::AppConfig;

/// URL a client visits to obtain a token via the implicit flow.
pub fn login_url(config: &AppConfig) -> String {
    format!(
        "https://{domain}/authorize?audience={audience}&response_type=token&client_id={client_id}&redirect_uri={redirect}",
        domain = config.auth_domain,
        audience = config.auth_audience,
        client_id = config.auth_client_id,
        redirect = config.base_url,
    )
}

/// URL a client visits to clear its provider session.
pub fn logout_url(config: &AppConfig) -> String {
    format!(
        "https://{domain}/v2/logout?audience={audience}&client_id={client_id}&returnTo={redirect}",
        domain = config.auth_domain,
        audience = config.auth_audience,
        client_id = config.auth_client_id,
        redirect = config.base_url,
    )
}
