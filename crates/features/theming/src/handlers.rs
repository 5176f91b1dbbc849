//! HTTP surface for site and theme resolution.
//!
//! Every handler is fail-open: missing tags, unknown clients, and malformed
//! preference values degrade to defaults instead of producing 4xx responses.

use crate::Theming;
use crate::resolver::resolve_rendering_config;
use axum::extract::{Query, State};
use axum::http::header;
use axum::{Json, response::IntoResponse};
use phub_domain::constants::SITE_TAG;
use phub_domain::site::SiteConfig;
use phub_domain::theme::{
    ACCESS_MODE_CATALOG, AccessModes, ColorMode, CreativeTheme, ModeSupport, ThemePreference,
};
use phub_kernel::server::ApiState;
use phub_tenancy::ExtractClientId;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(site_handler))
        .routes(routes!(themes_handler))
        .routes(routes!(rendering_config_handler))
}

/// Site configuration for the request's tenant
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct SiteResponse {
    /// Resolved tenant slug
    client: String,
    /// Brand display name
    brand_name: String,
    /// Subtitle shown under the brand
    tagline: String,
    /// Logo asset for light mode
    logo_light: String,
    /// Logo asset for dark mode
    logo_dark: String,
    /// Whether the developer track is offered
    has_developer_track: bool,
    /// Enabled content sections, in page order
    sections: Vec<&'static str>,
}

impl SiteResponse {
    fn new(client: String, site: &SiteConfig) -> Self {
        Self {
            client,
            brand_name: site.brand_name.clone(),
            tagline: site.tagline.clone(),
            logo_light: site.logo_light.clone(),
            logo_dark: site.logo_dark.clone(),
            has_developer_track: site.has_developer_track,
            sections: site.sections.names(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/site",
    responses((status = OK, description = "Site configuration for the tagged tenant", body = SiteResponse)),
    tag = SITE_TAG,
)]
#[allow(clippy::unused_async)]
async fn site_handler(
    ExtractClientId(client): ExtractClientId,
    State(state): State<ApiState>,
) -> impl IntoResponse {
    let fallback = SiteConfig::default();
    let body = match state.get_slice::<Theming>() {
        Some(theming) => SiteResponse::new(client.to_string(), theming.registry.resolve(&client)),
        None => SiteResponse::new(client.to_string(), &fallback),
    };

    Json(body)
}

/// One creative theme catalog entry
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct ThemeView {
    id: &'static str,
    label: &'static str,
    description: &'static str,
    /// `dual-mode` or `dark-only`
    mode_support: &'static str,
    swatch: Vec<&'static str>,
    highlight_light: &'static str,
    highlight_dark: &'static str,
}

/// Accessibility mode catalog entry
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct AccessModeView {
    id: &'static str,
    label: &'static str,
    description: &'static str,
}

/// The full theme picker catalog
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct ThemeCatalogResponse {
    themes: Vec<ThemeView>,
    access_modes: Vec<AccessModeView>,
}

#[utoipa::path(
    get,
    path = "/api/themes",
    responses((status = OK, description = "Creative theme and accessibility mode catalog", body = ThemeCatalogResponse)),
    tag = SITE_TAG,
)]
#[allow(clippy::unused_async)]
async fn themes_handler() -> impl IntoResponse {
    let themes = CreativeTheme::ALL
        .into_iter()
        .map(|theme| {
            let def = theme.definition();
            ThemeView {
                id: def.id,
                label: def.label,
                description: def.description,
                mode_support: match def.mode_support {
                    ModeSupport::DualMode => "dual-mode",
                    ModeSupport::DarkOnly => "dark-only",
                },
                swatch: def.swatch.to_vec(),
                highlight_light: def.highlight.light,
                highlight_dark: def.highlight.dark,
            }
        })
        .collect();

    let access_modes = ACCESS_MODE_CATALOG
        .into_iter()
        .map(|info| AccessModeView {
            id: info.id,
            label: info.label,
            description: info.description,
        })
        .collect();

    // The catalog is static for the lifetime of the deployment.
    (
        [(header::CACHE_CONTROL, "public, max-age=3600")],
        Json(ThemeCatalogResponse { themes, access_modes }),
    )
}

/// Persisted preference values, as the client stores them.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(default)]
struct PreferenceQuery {
    /// Creative theme id (untrusted; unknown ids fall back to the base theme)
    theme: Option<String>,
    /// Stored light/dark preference; anything but `light`/`dark` means light
    mode: Option<String>,
    /// Comma-separated accessibility mode ids
    access: Option<String>,
}

impl PreferenceQuery {
    // Persisted values are untrusted strings; parse failures degrade to
    // defaults instead of rejecting the request.
    fn into_preference(self) -> ThemePreference {
        let mode = self.mode.as_deref().and_then(|m| m.parse::<ColorMode>().ok());
        let access = self
            .access
            .as_deref()
            .map(|raw| AccessModes::from_names(raw.split(',').map(str::trim)))
            .unwrap_or_default();

        ThemePreference { theme: self.theme, mode: mode.unwrap_or_default(), access }
    }
}

/// Resolved rendering configuration
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
struct RenderingConfigResponse {
    /// Effective color mode (`light` or `dark`)
    mode: &'static str,
    /// Effective syntax-highlight theme name
    highlight_theme: String,
    /// Logo asset for the effective mode
    logo: String,
    /// Active accessibility mode ids
    access: Vec<&'static str>,
}

#[utoipa::path(
    get,
    path = "/api/rendering-config",
    params(PreferenceQuery),
    responses((status = OK, description = "Rendering configuration for the tagged tenant and given preference", body = RenderingConfigResponse)),
    tag = SITE_TAG,
)]
#[allow(clippy::unused_async)]
async fn rendering_config_handler(
    ExtractClientId(client): ExtractClientId,
    State(state): State<ApiState>,
    Query(query): Query<PreferenceQuery>,
) -> impl IntoResponse {
    let pref = query.into_preference();
    let fallback = SiteConfig::default();
    let site = match state.get_slice::<Theming>() {
        Some(theming) => theming.registry.resolve(&client).clone(),
        None => fallback,
    };

    let resolved = resolve_rendering_config(&site, &pref);
    let body = RenderingConfigResponse {
        mode: match resolved.mode {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        },
        highlight_theme: resolved.highlight_theme,
        logo: resolved.logo,
        access: pref.access.names(),
    };

    Json(body)
}
