//! Block storage: volumes, boot volumes and attachments.

use crate::catalog::common::{DEFINED_TAGS, FREEFORM_TAGS};
use crate::model::descriptor::{BOOLEAN, DATETIME, INTEGER, STRING};
use crate::model::{
    DefaultValue, Discriminator, EnumType, FieldDescriptor, ModelDescriptor, SemanticType,
};

pub static VOLUME_LIFECYCLE_STATE: EnumType = EnumType::new(
    "VolumeLifecycleState",
    &["PROVISIONING", "RESTORING", "AVAILABLE", "TERMINATING", "TERMINATED", "FAULTY"],
);

pub static ATTACHMENT_LIFECYCLE_STATE: EnumType = EnumType::new(
    "AttachmentLifecycleState",
    &["ATTACHING", "ATTACHED", "DETACHING", "DETACHED"],
);

pub static ENCRYPTION_IN_TRANSIT_TYPE: EnumType = EnumType::new(
    "EncryptionInTransitType",
    &["NONE", "BM_ENCRYPTION_IN_TRANSIT"],
);

// =============================================================================
// VOLUME SOURCES
// =============================================================================

/// Clone source of a new volume; polymorphic on `type`.
pub static VOLUME_SOURCE_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "VolumeSourceDetails",
    fields: &[FieldDescriptor::new("type", "type", STRING).required()],
    ..ModelDescriptor::base(&VOLUME_SOURCE_DISCRIMINATOR)
};

static VOLUME_SOURCE_DISCRIMINATOR: Discriminator = Discriminator {
    field: "type",
    wire_key: "type",
    subtypes: &[
        ("volume", &VOLUME_SOURCE_FROM_VOLUME_DETAILS),
        ("volumeBackup", &VOLUME_SOURCE_FROM_VOLUME_BACKUP_DETAILS),
    ],
};

pub static VOLUME_SOURCE_FROM_VOLUME_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "VolumeSourceFromVolumeDetails",
    fields: &[FieldDescriptor::new("id", "id", STRING).required()],
    ..ModelDescriptor::subtype(&VOLUME_SOURCE_DETAILS, "volume")
};

pub static VOLUME_SOURCE_FROM_VOLUME_BACKUP_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "VolumeSourceFromVolumeBackupDetails",
    fields: &[FieldDescriptor::new("id", "id", STRING).required()],
    ..ModelDescriptor::subtype(&VOLUME_SOURCE_DETAILS, "volumeBackup")
};

// =============================================================================
// VOLUMES
// =============================================================================

pub static CREATE_VOLUME_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "CreateVolumeDetails",
    fields: &[
        FieldDescriptor::new("availability_domain", "availabilityDomain", STRING),
        FieldDescriptor::new("compartment_id", "compartmentId", STRING).required(),
        FieldDescriptor::new("defined_tags", "definedTags", DEFINED_TAGS),
        FieldDescriptor::new("display_name", "displayName", STRING),
        FieldDescriptor::new("freeform_tags", "freeformTags", FREEFORM_TAGS),
        FieldDescriptor::new("is_auto_tune_enabled", "isAutoTuneEnabled", BOOLEAN),
        FieldDescriptor::new("kms_key_id", "kmsKeyId", STRING),
        FieldDescriptor::new("size_in_gbs", "sizeInGBs", INTEGER),
        FieldDescriptor::new(
            "source_details",
            "sourceDetails",
            SemanticType::Model(&VOLUME_SOURCE_DETAILS),
        ),
        FieldDescriptor::new("vpus_per_gb", "vpusPerGB", INTEGER),
    ],
    ..ModelDescriptor::plain()
};

pub static VOLUME: ModelDescriptor = ModelDescriptor {
    name: "Volume",
    fields: &[
        FieldDescriptor::new("availability_domain", "availabilityDomain", STRING).required(),
        FieldDescriptor::new("compartment_id", "compartmentId", STRING).required(),
        FieldDescriptor::new("defined_tags", "definedTags", DEFINED_TAGS),
        FieldDescriptor::new("display_name", "displayName", STRING).required(),
        FieldDescriptor::new("freeform_tags", "freeformTags", FREEFORM_TAGS),
        FieldDescriptor::new("id", "id", STRING).required(),
        FieldDescriptor::new("is_auto_tune_enabled", "isAutoTuneEnabled", BOOLEAN),
        FieldDescriptor::new("is_hydrated", "isHydrated", BOOLEAN),
        FieldDescriptor::new("kms_key_id", "kmsKeyId", STRING),
        FieldDescriptor::new(
            "lifecycle_state",
            "lifecycleState",
            SemanticType::lenient(&VOLUME_LIFECYCLE_STATE),
        )
        .required(),
        FieldDescriptor::new("size_in_gbs", "sizeInGBs", INTEGER),
        FieldDescriptor::new("size_in_mbs", "sizeInMBs", INTEGER).required(),
        FieldDescriptor::new(
            "source_details",
            "sourceDetails",
            SemanticType::Model(&VOLUME_SOURCE_DETAILS),
        ),
        FieldDescriptor::new("time_created", "timeCreated", DATETIME).required(),
        FieldDescriptor::new("volume_group_id", "volumeGroupId", STRING),
        FieldDescriptor::new("vpus_per_gb", "vpusPerGB", INTEGER),
    ],
    ..ModelDescriptor::plain()
};

pub static BOOT_VOLUME: ModelDescriptor = ModelDescriptor {
    name: "BootVolume",
    fields: &[
        FieldDescriptor::new("availability_domain", "availabilityDomain", STRING).required(),
        FieldDescriptor::new("compartment_id", "compartmentId", STRING).required(),
        FieldDescriptor::new("defined_tags", "definedTags", DEFINED_TAGS),
        FieldDescriptor::new("display_name", "displayName", STRING),
        FieldDescriptor::new("freeform_tags", "freeformTags", FREEFORM_TAGS),
        FieldDescriptor::new("id", "id", STRING).required(),
        FieldDescriptor::new("image_id", "imageId", STRING),
        FieldDescriptor::new("is_hydrated", "isHydrated", BOOLEAN),
        FieldDescriptor::new("kms_key_id", "kmsKeyId", STRING),
        FieldDescriptor::new(
            "lifecycle_state",
            "lifecycleState",
            SemanticType::lenient(&VOLUME_LIFECYCLE_STATE),
        )
        .required(),
        FieldDescriptor::new("size_in_gbs", "sizeInGBs", INTEGER),
        FieldDescriptor::new("size_in_mbs", "sizeInMBs", INTEGER).required(),
        FieldDescriptor::new("time_created", "timeCreated", DATETIME).required(),
        FieldDescriptor::new("vpus_per_gb", "vpusPerGB", INTEGER),
    ],
    ..ModelDescriptor::plain()
};

// =============================================================================
// ATTACH REQUESTS
// =============================================================================

/// Request to attach a volume to an instance; polymorphic on `type`.
pub static ATTACH_VOLUME_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "AttachVolumeDetails",
    fields: &[
        FieldDescriptor::new("device", "device", STRING),
        FieldDescriptor::new("display_name", "displayName", STRING),
        FieldDescriptor::new("instance_id", "instanceId", STRING).required(),
        FieldDescriptor::new("is_read_only", "isReadOnly", BOOLEAN)
            .with_default(DefaultValue::Bool(false)),
        FieldDescriptor::new("is_shareable", "isShareable", BOOLEAN)
            .with_default(DefaultValue::Bool(false)),
        FieldDescriptor::new("type", "type", STRING).required(),
        FieldDescriptor::new("volume_id", "volumeId", STRING).required(),
    ],
    ..ModelDescriptor::base(&ATTACH_VOLUME_DISCRIMINATOR)
};

static ATTACH_VOLUME_DISCRIMINATOR: Discriminator = Discriminator {
    field: "type",
    wire_key: "type",
    subtypes: &[
        ("iscsi", &ATTACH_ISCSI_VOLUME_DETAILS),
        ("paravirtualized", &ATTACH_PARAVIRTUALIZED_VOLUME_DETAILS),
        ("emulated", &ATTACH_EMULATED_VOLUME_DETAILS),
    ],
};

pub static ATTACH_ISCSI_VOLUME_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "AttachIScsiVolumeDetails",
    fields: &[
        FieldDescriptor::new("use_chap", "useChap", BOOLEAN),
        FieldDescriptor::new(
            "encryption_in_transit_type",
            "encryptionInTransitType",
            SemanticType::strict(&ENCRYPTION_IN_TRANSIT_TYPE),
        ),
        FieldDescriptor::new(
            "is_agent_auto_iscsi_login_enabled",
            "isAgentAutoIscsiLoginEnabled",
            BOOLEAN,
        ),
    ],
    ..ModelDescriptor::subtype(&ATTACH_VOLUME_DETAILS, "iscsi")
};

pub static ATTACH_PARAVIRTUALIZED_VOLUME_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "AttachParavirtualizedVolumeDetails",
    fields: &[FieldDescriptor::new(
        "is_pv_encryption_in_transit_enabled",
        "isPvEncryptionInTransitEnabled",
        BOOLEAN,
    )],
    ..ModelDescriptor::subtype(&ATTACH_VOLUME_DETAILS, "paravirtualized")
};

pub static ATTACH_EMULATED_VOLUME_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "AttachEmulatedVolumeDetails",
    ..ModelDescriptor::subtype(&ATTACH_VOLUME_DETAILS, "emulated")
};

// =============================================================================
// ATTACHMENTS
// =============================================================================

/// An existing attachment; polymorphic on `attachmentType`.
pub static VOLUME_ATTACHMENT: ModelDescriptor = ModelDescriptor {
    name: "VolumeAttachment",
    fields: &[
        FieldDescriptor::new("attachment_type", "attachmentType", STRING).required(),
        FieldDescriptor::new("availability_domain", "availabilityDomain", STRING).required(),
        FieldDescriptor::new("compartment_id", "compartmentId", STRING).required(),
        FieldDescriptor::new("device", "device", STRING),
        FieldDescriptor::new("display_name", "displayName", STRING),
        FieldDescriptor::new("id", "id", STRING).required(),
        FieldDescriptor::new("instance_id", "instanceId", STRING).required(),
        FieldDescriptor::new("is_multipath", "isMultipath", BOOLEAN),
        FieldDescriptor::new(
            "is_pv_encryption_in_transit_enabled",
            "isPvEncryptionInTransitEnabled",
            BOOLEAN,
        ),
        FieldDescriptor::new("is_read_only", "isReadOnly", BOOLEAN),
        FieldDescriptor::new("is_shareable", "isShareable", BOOLEAN),
        FieldDescriptor::new(
            "lifecycle_state",
            "lifecycleState",
            SemanticType::lenient(&ATTACHMENT_LIFECYCLE_STATE),
        )
        .required(),
        FieldDescriptor::new("time_created", "timeCreated", DATETIME).required(),
        FieldDescriptor::new("volume_id", "volumeId", STRING).required(),
    ],
    ..ModelDescriptor::base(&VOLUME_ATTACHMENT_DISCRIMINATOR)
};

static VOLUME_ATTACHMENT_DISCRIMINATOR: Discriminator = Discriminator {
    field: "attachment_type",
    wire_key: "attachmentType",
    subtypes: &[
        ("iscsi", &ISCSI_VOLUME_ATTACHMENT),
        ("paravirtualized", &PARAVIRTUALIZED_VOLUME_ATTACHMENT),
        ("emulated", &EMULATED_VOLUME_ATTACHMENT),
    ],
};

pub static ISCSI_VOLUME_ATTACHMENT: ModelDescriptor = ModelDescriptor {
    name: "IScsiVolumeAttachment",
    fields: &[
        FieldDescriptor::new("chap_secret", "chapSecret", STRING),
        FieldDescriptor::new("chap_username", "chapUsername", STRING),
        FieldDescriptor::new(
            "encryption_in_transit_type",
            "encryptionInTransitType",
            SemanticType::lenient(&ENCRYPTION_IN_TRANSIT_TYPE),
        ),
        FieldDescriptor::new("ipv4", "ipv4", STRING).required(),
        FieldDescriptor::new("iqn", "iqn", STRING).required(),
        FieldDescriptor::new("port", "port", INTEGER).required(),
    ],
    ..ModelDescriptor::subtype(&VOLUME_ATTACHMENT, "iscsi")
};

pub static PARAVIRTUALIZED_VOLUME_ATTACHMENT: ModelDescriptor = ModelDescriptor {
    name: "ParavirtualizedVolumeAttachment",
    ..ModelDescriptor::subtype(&VOLUME_ATTACHMENT, "paravirtualized")
};

pub static EMULATED_VOLUME_ATTACHMENT: ModelDescriptor = ModelDescriptor {
    name: "EmulatedVolumeAttachment",
    ..ModelDescriptor::subtype(&VOLUME_ATTACHMENT, "emulated")
};
