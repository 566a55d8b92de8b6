//! Model descriptors for a slice of the cloud infrastructure core API.
//!
//! Descriptors are grouped by service. Request models (`Create*`,
//! `Launch*`, `Attach*`) use strict enums; response and shared models use
//! lenient enums so that values added server-side do not break decoding.

pub mod block_storage;
pub mod common;
pub mod compute;
pub mod network;

use lazy_static::lazy_static;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::CatalogError;
use crate::model::ModelDescriptor;

static MODELS: &[&ModelDescriptor] = &[
    // network
    &network::DHCP_OPTION,
    &network::DHCP_DNS_OPTION,
    &network::DHCP_SEARCH_DOMAIN_OPTION,
    &network::DHCP_OPTIONS,
    &network::CREATE_DHCP_DETAILS,
    &network::VCN,
    &network::CREATE_VCN_DETAILS,
    &network::SUBNET,
    &network::CREATE_VNIC_DETAILS,
    // compute
    &compute::INSTANCE_SOURCE_DETAILS,
    &compute::INSTANCE_SOURCE_VIA_IMAGE_DETAILS,
    &compute::INSTANCE_SOURCE_VIA_BOOT_VOLUME_DETAILS,
    &compute::LAUNCH_INSTANCE_SHAPE_CONFIG_DETAILS,
    &compute::INSTANCE_SHAPE_CONFIG,
    &compute::LAUNCH_OPTIONS,
    &compute::LAUNCH_INSTANCE_DETAILS,
    &compute::INSTANCE,
    &compute::IMAGE_SOURCE_DETAILS,
    &compute::IMAGE_SOURCE_VIA_OBJECT_STORAGE_TUPLE_DETAILS,
    &compute::IMAGE_SOURCE_VIA_OBJECT_STORAGE_URI_DETAILS,
    &compute::CREATE_IMAGE_DETAILS,
    &compute::INSTANCE_CONFIGURATION_INSTANCE_DETAILS,
    &compute::COMPUTE_INSTANCE_DETAILS,
    &compute::COMPUTE_INSTANCE_OPTIONS,
    &compute::INSTANCE_CONFIGURATION_LAUNCH_INSTANCE_DETAILS,
    &compute::INSTANCE_CONFIGURATION_BLOCK_VOLUME_DETAILS,
    &compute::INSTANCE_CONFIGURATION,
    // block storage
    &block_storage::VOLUME_SOURCE_DETAILS,
    &block_storage::VOLUME_SOURCE_FROM_VOLUME_DETAILS,
    &block_storage::VOLUME_SOURCE_FROM_VOLUME_BACKUP_DETAILS,
    &block_storage::CREATE_VOLUME_DETAILS,
    &block_storage::VOLUME,
    &block_storage::BOOT_VOLUME,
    &block_storage::ATTACH_VOLUME_DETAILS,
    &block_storage::ATTACH_ISCSI_VOLUME_DETAILS,
    &block_storage::ATTACH_PARAVIRTUALIZED_VOLUME_DETAILS,
    &block_storage::ATTACH_EMULATED_VOLUME_DETAILS,
    &block_storage::VOLUME_ATTACHMENT,
    &block_storage::ISCSI_VOLUME_ATTACHMENT,
    &block_storage::PARAVIRTUALIZED_VOLUME_ATTACHMENT,
    &block_storage::EMULATED_VOLUME_ATTACHMENT,
];

lazy_static! {
    static ref REGISTRY: FxHashMap<&'static str, &'static ModelDescriptor> =
        MODELS.iter().map(|model| (model.name, *model)).collect();
}

/// Finds a model by name, e.g. `"LaunchInstanceDetails"`.
pub fn lookup(name: &str) -> Option<&'static ModelDescriptor> {
    REGISTRY.get(name).copied()
}

/// Returns every model in the catalog.
pub fn models() -> &'static [&'static ModelDescriptor] {
    MODELS
}

/// Verifies that model names are unique and that every discriminator table
/// agrees with the parent links and literals of its subtypes.
pub fn check_catalog() -> Result<(), CatalogError> {
    let mut names = FxHashSet::default();
    for model in MODELS {
        if !names.insert(model.name) {
            return Err(CatalogError::DuplicateModel { name: model.name });
        }
    }

    for model in MODELS {
        if let Some(disc) = model.discriminator {
            if model.field(disc.field).is_none() {
                return Err(CatalogError::MissingDiscriminatorField {
                    model: model.name,
                    field: disc.field,
                });
            }

            let mut literals = FxHashSet::default();
            for &(literal, subtype) in disc.subtypes {
                if !literals.insert(literal) {
                    return Err(CatalogError::DuplicateDiscriminator {
                        model: model.name,
                        literal,
                    });
                }
                let linked = subtype.parent.is_some_and(|p| p == *model)
                    && subtype.discriminator_value == Some(literal);
                if !linked {
                    return Err(CatalogError::InconsistentSubtype {
                        model: model.name,
                        subtype: subtype.name,
                        literal,
                    });
                }
            }
        }

        if let (Some(parent), Some(literal)) = (model.parent, model.discriminator_value) {
            let registered = parent
                .discriminator
                .and_then(|disc| disc.subtype(literal))
                .is_some_and(|subtype| subtype == *model);
            if !registered {
                return Err(CatalogError::InconsistentSubtype {
                    model: parent.name,
                    subtype: model.name,
                    literal,
                });
            }
        }
    }

    Ok(())
}
