//! Virtual networking: VCNs, subnets, VNICs and DHCP options.

use crate::catalog::common::{DEFINED_TAGS, FREEFORM_TAGS};
use crate::model::descriptor::{BOOLEAN, DATETIME, STRING, STRING_LIST};
use crate::model::{Discriminator, EnumType, FieldDescriptor, ModelDescriptor, SemanticType};

pub static NETWORK_LIFECYCLE_STATE: EnumType = EnumType::new(
    "NetworkLifecycleState",
    &["PROVISIONING", "AVAILABLE", "TERMINATING", "TERMINATED", "UPDATING"],
);

pub static DHCP_LIFECYCLE_STATE: EnumType = EnumType::new(
    "DhcpLifecycleState",
    &["PROVISIONING", "AVAILABLE", "TERMINATING", "TERMINATED"],
);

pub static DOMAIN_NAME_TYPE: EnumType = EnumType::new(
    "DomainNameType",
    &["SUBNET_DOMAIN", "VCN_DOMAIN", "CUSTOM_DOMAIN"],
);

pub static DNS_SERVER_TYPE: EnumType = EnumType::new(
    "DnsServerType",
    &["VcnLocal", "VcnLocalPlusInternet", "CustomDnsServer"],
);

// =============================================================================
// DHCP OPTIONS
// =============================================================================

/// One DHCP option; polymorphic on `type`.
pub static DHCP_OPTION: ModelDescriptor = ModelDescriptor {
    name: "DhcpOption",
    fields: &[FieldDescriptor::new("type", "type", STRING).required()],
    ..ModelDescriptor::base(&DHCP_OPTION_DISCRIMINATOR)
};

static DHCP_OPTION_DISCRIMINATOR: Discriminator = Discriminator {
    field: "type",
    wire_key: "type",
    subtypes: &[
        ("DomainNameServer", &DHCP_DNS_OPTION),
        ("SearchDomain", &DHCP_SEARCH_DOMAIN_OPTION),
    ],
};

static DHCP_OPTION_TYPE: SemanticType = SemanticType::Model(&DHCP_OPTION);

/// DNS servers handed out to instances in the VCN.
pub static DHCP_DNS_OPTION: ModelDescriptor = ModelDescriptor {
    name: "DhcpDnsOption",
    fields: &[
        FieldDescriptor::new("custom_dns_servers", "customDnsServers", STRING_LIST),
        FieldDescriptor::new(
            "server_type",
            "serverType",
            SemanticType::lenient(&DNS_SERVER_TYPE),
        )
        .required(),
    ],
    ..ModelDescriptor::subtype(&DHCP_OPTION, "DomainNameServer")
};

/// Search domains appended to unqualified host names.
pub static DHCP_SEARCH_DOMAIN_OPTION: ModelDescriptor = ModelDescriptor {
    name: "DhcpSearchDomainOption",
    fields: &[
        FieldDescriptor::new("search_domain_names", "searchDomainNames", STRING_LIST).required(),
    ],
    ..ModelDescriptor::subtype(&DHCP_OPTION, "SearchDomain")
};

pub static DHCP_OPTIONS: ModelDescriptor = ModelDescriptor {
    name: "DhcpOptions",
    fields: &[
        FieldDescriptor::new("compartment_id", "compartmentId", STRING).required(),
        FieldDescriptor::new("defined_tags", "definedTags", DEFINED_TAGS),
        FieldDescriptor::new("display_name", "displayName", STRING),
        FieldDescriptor::new("freeform_tags", "freeformTags", FREEFORM_TAGS),
        FieldDescriptor::new("id", "id", STRING).required(),
        FieldDescriptor::new(
            "lifecycle_state",
            "lifecycleState",
            SemanticType::lenient(&DHCP_LIFECYCLE_STATE),
        )
        .required(),
        FieldDescriptor::new("options", "options", SemanticType::List(&DHCP_OPTION_TYPE))
            .required(),
        FieldDescriptor::new("time_created", "timeCreated", DATETIME).required(),
        FieldDescriptor::new("vcn_id", "vcnId", STRING).required(),
        FieldDescriptor::new(
            "domain_name_type",
            "domainNameType",
            SemanticType::lenient(&DOMAIN_NAME_TYPE),
        ),
    ],
    ..ModelDescriptor::plain()
};

pub static CREATE_DHCP_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "CreateDhcpDetails",
    fields: &[
        FieldDescriptor::new("compartment_id", "compartmentId", STRING).required(),
        FieldDescriptor::new("defined_tags", "definedTags", DEFINED_TAGS),
        FieldDescriptor::new("display_name", "displayName", STRING),
        FieldDescriptor::new("freeform_tags", "freeformTags", FREEFORM_TAGS),
        FieldDescriptor::new("options", "options", SemanticType::List(&DHCP_OPTION_TYPE))
            .required(),
        FieldDescriptor::new("vcn_id", "vcnId", STRING).required(),
        FieldDescriptor::new(
            "domain_name_type",
            "domainNameType",
            SemanticType::strict(&DOMAIN_NAME_TYPE),
        ),
    ],
    ..ModelDescriptor::plain()
};

// =============================================================================
// VCNS AND SUBNETS
// =============================================================================

pub static VCN: ModelDescriptor = ModelDescriptor {
    name: "Vcn",
    fields: &[
        FieldDescriptor::new("cidr_block", "cidrBlock", STRING),
        FieldDescriptor::new("cidr_blocks", "cidrBlocks", STRING_LIST).required(),
        FieldDescriptor::new("compartment_id", "compartmentId", STRING).required(),
        FieldDescriptor::new("default_dhcp_options_id", "defaultDhcpOptionsId", STRING),
        FieldDescriptor::new("default_route_table_id", "defaultRouteTableId", STRING),
        FieldDescriptor::new("default_security_list_id", "defaultSecurityListId", STRING),
        FieldDescriptor::new("defined_tags", "definedTags", DEFINED_TAGS),
        FieldDescriptor::new("display_name", "displayName", STRING),
        FieldDescriptor::new("dns_label", "dnsLabel", STRING),
        FieldDescriptor::new("freeform_tags", "freeformTags", FREEFORM_TAGS),
        FieldDescriptor::new("id", "id", STRING).required(),
        FieldDescriptor::new("ipv6_cidr_blocks", "ipv6CidrBlocks", STRING_LIST),
        FieldDescriptor::new(
            "lifecycle_state",
            "lifecycleState",
            SemanticType::lenient(&NETWORK_LIFECYCLE_STATE),
        )
        .required(),
        FieldDescriptor::new("time_created", "timeCreated", DATETIME),
        FieldDescriptor::new("vcn_domain_name", "vcnDomainName", STRING),
    ],
    ..ModelDescriptor::plain()
};

pub static CREATE_VCN_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "CreateVcnDetails",
    fields: &[
        FieldDescriptor::new("cidr_block", "cidrBlock", STRING),
        FieldDescriptor::new("cidr_blocks", "cidrBlocks", STRING_LIST),
        FieldDescriptor::new("compartment_id", "compartmentId", STRING).required(),
        FieldDescriptor::new("defined_tags", "definedTags", DEFINED_TAGS),
        FieldDescriptor::new("display_name", "displayName", STRING),
        FieldDescriptor::new("dns_label", "dnsLabel", STRING),
        FieldDescriptor::new("freeform_tags", "freeformTags", FREEFORM_TAGS),
        FieldDescriptor::new("is_ipv6_enabled", "isIpv6Enabled", BOOLEAN),
    ],
    ..ModelDescriptor::plain()
};

pub static SUBNET: ModelDescriptor = ModelDescriptor {
    name: "Subnet",
    fields: &[
        FieldDescriptor::new("availability_domain", "availabilityDomain", STRING),
        FieldDescriptor::new("cidr_block", "cidrBlock", STRING).required(),
        FieldDescriptor::new("compartment_id", "compartmentId", STRING).required(),
        FieldDescriptor::new("defined_tags", "definedTags", DEFINED_TAGS),
        FieldDescriptor::new("dhcp_options_id", "dhcpOptionsId", STRING),
        FieldDescriptor::new("display_name", "displayName", STRING),
        FieldDescriptor::new("dns_label", "dnsLabel", STRING),
        FieldDescriptor::new("freeform_tags", "freeformTags", FREEFORM_TAGS),
        FieldDescriptor::new("id", "id", STRING).required(),
        FieldDescriptor::new(
            "lifecycle_state",
            "lifecycleState",
            SemanticType::lenient(&NETWORK_LIFECYCLE_STATE),
        )
        .required(),
        FieldDescriptor::new("prohibit_public_ip_on_vnic", "prohibitPublicIpOnVnic", BOOLEAN),
        FieldDescriptor::new("route_table_id", "routeTableId", STRING).required(),
        FieldDescriptor::new("security_list_ids", "securityListIds", STRING_LIST),
        FieldDescriptor::new("subnet_domain_name", "subnetDomainName", STRING),
        FieldDescriptor::new("time_created", "timeCreated", DATETIME),
        FieldDescriptor::new("vcn_id", "vcnId", STRING).required(),
        FieldDescriptor::new("virtual_router_ip", "virtualRouterIp", STRING).required(),
        FieldDescriptor::new("virtual_router_mac", "virtualRouterMac", STRING).required(),
    ],
    ..ModelDescriptor::plain()
};

pub static CREATE_VNIC_DETAILS: ModelDescriptor = ModelDescriptor {
    name: "CreateVnicDetails",
    fields: &[
        FieldDescriptor::new("assign_public_ip", "assignPublicIp", BOOLEAN),
        FieldDescriptor::new("assign_private_dns_record", "assignPrivateDnsRecord", BOOLEAN),
        FieldDescriptor::new("defined_tags", "definedTags", DEFINED_TAGS),
        FieldDescriptor::new("display_name", "displayName", STRING),
        FieldDescriptor::new("freeform_tags", "freeformTags", FREEFORM_TAGS),
        FieldDescriptor::new("hostname_label", "hostnameLabel", STRING),
        FieldDescriptor::new("nsg_ids", "nsgIds", STRING_LIST),
        FieldDescriptor::new("private_ip", "privateIp", STRING),
        FieldDescriptor::new("skip_source_dest_check", "skipSourceDestCheck", BOOLEAN),
        FieldDescriptor::new("subnet_id", "subnetId", STRING),
    ],
    ..ModelDescriptor::plain()
};
