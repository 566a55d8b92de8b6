//! Compute: instances, launch requests, images and instance configurations.

use crate::catalog::block_storage::{ATTACH_VOLUME_DETAILS, CREATE_VOLUME_DETAILS};
use crate::catalog::common::{DEFINED_TAGS, FREEFORM_TAGS, OBJECT_MAP};
use crate::catalog::network::CREATE_VNIC_DETAILS;
use crate::model::descriptor::{BOOLEAN, DATETIME, FLOAT, INTEGER, STRING, STRING_LIST, STRING_MAP};
use crate::model::{Discriminator, EnumType, FieldDescriptor, ModelDescriptor, SemanticType};

pub static INSTANCE_LIFECYCLE_STATE: EnumType = EnumType::new(
    "InstanceLifecycleState",
    &[
        "MOVING",
        "PROVISIONING",
        "RUNNING",
        "STARTING",
        "STOPPING",
        "STOPPED",
        "CREATING_IMAGE",
        "TERMINATING",
        "TERMINATED",
    ],
);

pub static LAUNCH_MODE: EnumType = EnumType::new(
    "LaunchMode",
    &["NATIVE", "EMULATED", "PARAVIRTUALIZED", "CUSTOM"],
);

pub static BASELINE_OCPU_UTILIZATION: EnumType = EnumType::new(
    "BaselineOcpuUtilization",
    &["BASELINE_1_8", "BASELINE_1_2", "BASELINE_1_1"],
);

pub static VOLUME_TYPE: EnumType = EnumType::new(
    "VolumeType",
    &["ISCSI", "SCSI", "IDE", "VFIO", "PARAVIRTUALIZED"],
);

pub static FIRMWARE: EnumType = EnumType::new("Firmware", &["BIOS", "UEFI_64"]);

pub static NETWORK_TYPE: EnumType =
    EnumType::new("NetworkType", &["E1000", "VFIO", "PARAVIRTUALIZED"]);

pub static SOURCE_IMAGE_TYPE: EnumType = EnumType::new("SourceImageType", &["QCOW2", "VMDK"]);

// =============================================================================
// INSTANCE SOURCES
// =============================================================================

/// Boot source of a launched instance; polymorphic on `sourceType`.
pub static INSTANCE_SOURCE_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "InstanceSourceDetails",
    fields: &[FieldDescriptor::new("source_type", "sourceType", STRING).required()],
    ..ModelDescriptor::base(&INSTANCE_SOURCE_DISCRIMINATOR)
};

static INSTANCE_SOURCE_DISCRIMINATOR: Discriminator = Discriminator {
    field: "source_type",
    wire_key: "sourceType",
    subtypes: &[
        ("image", &INSTANCE_SOURCE_VIA_IMAGE_DETAILS),
        ("bootVolume", &INSTANCE_SOURCE_VIA_BOOT_VOLUME_DETAILS),
    ],
};

pub static INSTANCE_SOURCE_VIA_IMAGE_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "InstanceSourceViaImageDetails",
    fields: &[
        FieldDescriptor::new("boot_volume_size_in_gbs", "bootVolumeSizeInGBs", INTEGER),
        FieldDescriptor::new("boot_volume_vpus_per_gb", "bootVolumeVpusPerGB", INTEGER),
        FieldDescriptor::new("image_id", "imageId", STRING).required(),
        FieldDescriptor::new("kms_key_id", "kmsKeyId", STRING),
    ],
    ..ModelDescriptor::subtype(&INSTANCE_SOURCE_DETAILS, "image")
};

pub static INSTANCE_SOURCE_VIA_BOOT_VOLUME_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "InstanceSourceViaBootVolumeDetails",
    fields: &[FieldDescriptor::new("boot_volume_id", "bootVolumeId", STRING).required()],
    ..ModelDescriptor::subtype(&INSTANCE_SOURCE_DETAILS, "bootVolume")
};

// =============================================================================
// SHAPES AND LAUNCH OPTIONS
// =============================================================================

pub static LAUNCH_INSTANCE_SHAPE_CONFIG_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "LaunchInstanceShapeConfigDetails",
    fields: &[
        FieldDescriptor::new("ocpus", "ocpus", FLOAT),
        FieldDescriptor::new("memory_in_gbs", "memoryInGBs", FLOAT),
        FieldDescriptor::new(
            "baseline_ocpu_utilization",
            "baselineOcpuUtilization",
            SemanticType::strict(&BASELINE_OCPU_UTILIZATION),
        ),
        FieldDescriptor::new("nvmes", "nvmes", INTEGER),
    ],
    ..ModelDescriptor::plain()
};

pub static INSTANCE_SHAPE_CONFIG: ModelDescriptor = ModelDescriptor {
    name: "InstanceShapeConfig",
    fields: &[
        FieldDescriptor::new("ocpus", "ocpus", FLOAT),
        FieldDescriptor::new("memory_in_gbs", "memoryInGBs", FLOAT),
        FieldDescriptor::new(
            "baseline_ocpu_utilization",
            "baselineOcpuUtilization",
            SemanticType::lenient(&BASELINE_OCPU_UTILIZATION),
        ),
        FieldDescriptor::new("processor_description", "processorDescription", STRING),
        FieldDescriptor::new(
            "networking_bandwidth_in_gbps",
            "networkingBandwidthInGbps",
            FLOAT,
        ),
        FieldDescriptor::new("max_vnic_attachments", "maxVnicAttachments", INTEGER),
        FieldDescriptor::new("gpus", "gpus", INTEGER),
        FieldDescriptor::new("gpu_description", "gpuDescription", STRING),
        FieldDescriptor::new("local_disks", "localDisks", INTEGER),
        FieldDescriptor::new("local_disks_total_size_in_gbs", "localDisksTotalSizeInGBs", FLOAT),
        FieldDescriptor::new("local_disk_description", "localDiskDescription", STRING),
        FieldDescriptor::new("vcpus", "vcpus", INTEGER),
    ],
    ..ModelDescriptor::plain()
};

pub static LAUNCH_OPTIONS: ModelDescriptor = ModelDescriptor {
    name: "LaunchOptions",
    fields: &[
        FieldDescriptor::new(
            "boot_volume_type",
            "bootVolumeType",
            SemanticType::lenient(&VOLUME_TYPE),
        ),
        FieldDescriptor::new("firmware", "firmware", SemanticType::lenient(&FIRMWARE)),
        FieldDescriptor::new("network_type", "networkType", SemanticType::lenient(&NETWORK_TYPE)),
        FieldDescriptor::new(
            "remote_data_volume_type",
            "remoteDataVolumeType",
            SemanticType::lenient(&VOLUME_TYPE),
        ),
        FieldDescriptor::new(
            "is_pv_encryption_in_transit_enabled",
            "isPvEncryptionInTransitEnabled",
            BOOLEAN,
        ),
        FieldDescriptor::new(
            "is_consistent_volume_naming_enabled",
            "isConsistentVolumeNamingEnabled",
            BOOLEAN,
        ),
    ],
    ..ModelDescriptor::plain()
};

// =============================================================================
// INSTANCES
// =============================================================================

pub static LAUNCH_INSTANCE_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "LaunchInstanceDetails",
    fields: &[
        FieldDescriptor::new("availability_domain", "availabilityDomain", STRING).required(),
        FieldDescriptor::new("capacity_reservation_id", "capacityReservationId", STRING),
        FieldDescriptor::new("compartment_id", "compartmentId", STRING).required(),
        FieldDescriptor::new(
            "create_vnic_details",
            "createVnicDetails",
            SemanticType::Model(&CREATE_VNIC_DETAILS),
        ),
        FieldDescriptor::new("dedicated_vm_host_id", "dedicatedVmHostId", STRING),
        FieldDescriptor::new("defined_tags", "definedTags", DEFINED_TAGS),
        FieldDescriptor::new("display_name", "displayName", STRING),
        FieldDescriptor::new("extended_metadata", "extendedMetadata", OBJECT_MAP),
        FieldDescriptor::new("fault_domain", "faultDomain", STRING),
        FieldDescriptor::new("freeform_tags", "freeformTags", FREEFORM_TAGS),
        FieldDescriptor::new("hostname_label", "hostnameLabel", STRING),
        FieldDescriptor::new("ipxe_script", "ipxeScript", STRING),
        FieldDescriptor::new(
            "is_pv_encryption_in_transit_enabled",
            "isPvEncryptionInTransitEnabled",
            BOOLEAN,
        ),
        FieldDescriptor::new("launch_mode", "launchMode", SemanticType::strict(&LAUNCH_MODE)),
        FieldDescriptor::new(
            "launch_options",
            "launchOptions",
            SemanticType::Model(&LAUNCH_OPTIONS),
        ),
        FieldDescriptor::new("metadata", "metadata", STRING_MAP),
        FieldDescriptor::new("shape", "shape", STRING).required(),
        FieldDescriptor::new(
            "shape_config",
            "shapeConfig",
            SemanticType::Model(&LAUNCH_INSTANCE_SHAPE_CONFIG_DETAILS),
        ),
        FieldDescriptor::new(
            "source_details",
            "sourceDetails",
            SemanticType::Model(&INSTANCE_SOURCE_DETAILS),
        ),
        FieldDescriptor::new("subnet_id", "subnetId", STRING),
    ],
    ..ModelDescriptor::plain()
};

pub static INSTANCE: ModelDescriptor = ModelDescriptor {
    name: "Instance",
    fields: &[
        FieldDescriptor::new("availability_domain", "availabilityDomain", STRING).required(),
        FieldDescriptor::new("capacity_reservation_id", "capacityReservationId", STRING),
        FieldDescriptor::new("compartment_id", "compartmentId", STRING).required(),
        FieldDescriptor::new("dedicated_vm_host_id", "dedicatedVmHostId", STRING),
        FieldDescriptor::new("defined_tags", "definedTags", DEFINED_TAGS),
        FieldDescriptor::new("display_name", "displayName", STRING),
        FieldDescriptor::new("extended_metadata", "extendedMetadata", OBJECT_MAP),
        FieldDescriptor::new("fault_domain", "faultDomain", STRING),
        FieldDescriptor::new("freeform_tags", "freeformTags", FREEFORM_TAGS),
        FieldDescriptor::new("id", "id", STRING).required(),
        FieldDescriptor::new("image_id", "imageId", STRING),
        FieldDescriptor::new("ipxe_script", "ipxeScript", STRING),
        FieldDescriptor::new("launch_mode", "launchMode", SemanticType::lenient(&LAUNCH_MODE)),
        FieldDescriptor::new(
            "launch_options",
            "launchOptions",
            SemanticType::Model(&LAUNCH_OPTIONS),
        ),
        FieldDescriptor::new(
            "lifecycle_state",
            "lifecycleState",
            SemanticType::lenient(&INSTANCE_LIFECYCLE_STATE),
        )
        .required(),
        FieldDescriptor::new("metadata", "metadata", STRING_MAP),
        FieldDescriptor::new("region", "region", STRING).required(),
        FieldDescriptor::new("shape", "shape", STRING).required(),
        FieldDescriptor::new(
            "shape_config",
            "shapeConfig",
            SemanticType::Model(&INSTANCE_SHAPE_CONFIG),
        ),
        FieldDescriptor::new(
            "source_details",
            "sourceDetails",
            SemanticType::Model(&INSTANCE_SOURCE_DETAILS),
        ),
        FieldDescriptor::new("time_created", "timeCreated", DATETIME).required(),
        FieldDescriptor::new("time_maintenance_reboot_due", "timeMaintenanceRebootDue", DATETIME),
    ],
    ..ModelDescriptor::plain()
};

// =============================================================================
// IMAGES
// =============================================================================

/// Where an imported image comes from; polymorphic on `sourceType`.
pub static IMAGE_SOURCE_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "ImageSourceDetails",
    fields: &[
        FieldDescriptor::new("operating_system", "operatingSystem", STRING),
        FieldDescriptor::new("operating_system_version", "operatingSystemVersion", STRING),
        FieldDescriptor::new(
            "source_image_type",
            "sourceImageType",
            SemanticType::strict(&SOURCE_IMAGE_TYPE),
        ),
        FieldDescriptor::new("source_type", "sourceType", STRING).required(),
    ],
    ..ModelDescriptor::base(&IMAGE_SOURCE_DISCRIMINATOR)
};

static IMAGE_SOURCE_DISCRIMINATOR: Discriminator = Discriminator {
    field: "source_type",
    wire_key: "sourceType",
    subtypes: &[
        ("objectStorageTuple", &IMAGE_SOURCE_VIA_OBJECT_STORAGE_TUPLE_DETAILS),
        ("objectStorageUri", &IMAGE_SOURCE_VIA_OBJECT_STORAGE_URI_DETAILS),
    ],
};

pub static IMAGE_SOURCE_VIA_OBJECT_STORAGE_TUPLE_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "ImageSourceViaObjectStorageTupleDetails",
    fields: &[
        FieldDescriptor::new("bucket_name", "bucketName", STRING).required(),
        FieldDescriptor::new("namespace_name", "namespaceName", STRING).required(),
        FieldDescriptor::new("object_name", "objectName", STRING).required(),
    ],
    ..ModelDescriptor::subtype(&IMAGE_SOURCE_DETAILS, "objectStorageTuple")
};

pub static IMAGE_SOURCE_VIA_OBJECT_STORAGE_URI_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "ImageSourceViaObjectStorageUriDetails",
    fields: &[FieldDescriptor::new("source_uri", "sourceUri", STRING).required()],
    ..ModelDescriptor::subtype(&IMAGE_SOURCE_DETAILS, "objectStorageUri")
};

pub static CREATE_IMAGE_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "CreateImageDetails",
    fields: &[
        FieldDescriptor::new("compartment_id", "compartmentId", STRING).required(),
        FieldDescriptor::new("defined_tags", "definedTags", DEFINED_TAGS),
        FieldDescriptor::new("display_name", "displayName", STRING),
        FieldDescriptor::new("freeform_tags", "freeformTags", FREEFORM_TAGS),
        FieldDescriptor::new(
            "image_source_details",
            "imageSourceDetails",
            SemanticType::Model(&IMAGE_SOURCE_DETAILS),
        ),
        FieldDescriptor::new("instance_id", "instanceId", STRING),
        FieldDescriptor::new("launch_mode", "launchMode", SemanticType::strict(&LAUNCH_MODE)),
    ],
    ..ModelDescriptor::plain()
};

// =============================================================================
// INSTANCE CONFIGURATIONS
// =============================================================================

/// Template for instances created from a configuration; polymorphic on
/// `instanceType`.
pub static INSTANCE_CONFIGURATION_INSTANCE_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "InstanceConfigurationInstanceDetails",
    fields: &[FieldDescriptor::new("instance_type", "instanceType", STRING).required()],
    ..ModelDescriptor::base(&INSTANCE_DETAILS_DISCRIMINATOR)
};

static INSTANCE_DETAILS_DISCRIMINATOR: Discriminator = Discriminator {
    field: "instance_type",
    wire_key: "instanceType",
    subtypes: &[
        ("compute", &COMPUTE_INSTANCE_DETAILS),
        ("instance_options", &COMPUTE_INSTANCE_OPTIONS),
    ],
};

static INSTANCE_DETAILS_TYPE: SemanticType =
    SemanticType::Model(&INSTANCE_CONFIGURATION_INSTANCE_DETAILS);

static BLOCK_VOLUME_DETAILS_TYPE: SemanticType =
    SemanticType::Model(&INSTANCE_CONFIGURATION_BLOCK_VOLUME_DETAILS);

pub static COMPUTE_INSTANCE_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "ComputeInstanceDetails",
    fields: &[
        FieldDescriptor::new(
            "block_volumes",
            "blockVolumes",
            SemanticType::List(&BLOCK_VOLUME_DETAILS_TYPE),
        ),
        FieldDescriptor::new(
            "launch_details",
            "launchDetails",
            SemanticType::Model(&INSTANCE_CONFIGURATION_LAUNCH_INSTANCE_DETAILS),
        ),
    ],
    ..ModelDescriptor::subtype(&INSTANCE_CONFIGURATION_INSTANCE_DETAILS, "compute")
};

/// Several alternative instance templates, tried in order.
pub static COMPUTE_INSTANCE_OPTIONS: ModelDescriptor = ModelDescriptor {
    name: "ComputeInstanceOptions",
    fields: &[FieldDescriptor::new(
        "options",
        "options",
        SemanticType::List(&INSTANCE_DETAILS_TYPE),
    )],
    ..ModelDescriptor::subtype(&INSTANCE_CONFIGURATION_INSTANCE_DETAILS, "instance_options")
};

pub static INSTANCE_CONFIGURATION_LAUNCH_INSTANCE_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "InstanceConfigurationLaunchInstanceDetails",
    fields: &[
        FieldDescriptor::new("availability_domain", "availabilityDomain", STRING),
        FieldDescriptor::new("compartment_id", "compartmentId", STRING),
        FieldDescriptor::new(
            "create_vnic_details",
            "createVnicDetails",
            SemanticType::Model(&CREATE_VNIC_DETAILS),
        ),
        FieldDescriptor::new("defined_tags", "definedTags", DEFINED_TAGS),
        FieldDescriptor::new("display_name", "displayName", STRING),
        FieldDescriptor::new("extended_metadata", "extendedMetadata", OBJECT_MAP),
        FieldDescriptor::new("freeform_tags", "freeformTags", FREEFORM_TAGS),
        FieldDescriptor::new("launch_mode", "launchMode", SemanticType::lenient(&LAUNCH_MODE)),
        FieldDescriptor::new("metadata", "metadata", STRING_MAP),
        FieldDescriptor::new("shape", "shape", STRING),
        FieldDescriptor::new(
            "shape_config",
            "shapeConfig",
            SemanticType::Model(&LAUNCH_INSTANCE_SHAPE_CONFIG_DETAILS),
        ),
        FieldDescriptor::new(
            "source_details",
            "sourceDetails",
            SemanticType::Model(&INSTANCE_SOURCE_DETAILS),
        ),
    ],
    ..ModelDescriptor::plain()
};

pub static INSTANCE_CONFIGURATION_BLOCK_VOLUME_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "InstanceConfigurationBlockVolumeDetails",
    fields: &[
        FieldDescriptor::new(
            "attach_details",
            "attachDetails",
            SemanticType::Model(&ATTACH_VOLUME_DETAILS),
        ),
        FieldDescriptor::new(
            "create_details",
            "createDetails",
            SemanticType::Model(&CREATE_VOLUME_DETAILS),
        ),
        FieldDescriptor::new("volume_id", "volumeId", STRING),
    ],
    ..ModelDescriptor::plain()
};

pub static INSTANCE_CONFIGURATION: ModelDescriptor = ModelDescriptor {
    name: "InstanceConfiguration",
    fields: &[
        FieldDescriptor::new("compartment_id", "compartmentId", STRING).required(),
        FieldDescriptor::new("deferred_fields", "deferredFields", STRING_LIST),
        FieldDescriptor::new("defined_tags", "definedTags", DEFINED_TAGS),
        FieldDescriptor::new("display_name", "displayName", STRING),
        FieldDescriptor::new("freeform_tags", "freeformTags", FREEFORM_TAGS),
        FieldDescriptor::new("id", "id", STRING).required(),
        FieldDescriptor::new(
            "instance_details",
            "instanceDetails",
            SemanticType::Model(&INSTANCE_CONFIGURATION_INSTANCE_DETAILS),
        ),
        FieldDescriptor::new("time_created", "timeCreated", DATETIME).required(),
    ],
    ..ModelDescriptor::plain()
};
