//! Geographic metadata (`gmd`), the XML encoding of ISO 19115.
//!
//! The declarations are grouped like the schema documents of the namespace: citation,
//! identification, metadata entity, maintenance, constraints, distribution, spatial
//! representation, reference system, extent, content, application schema, portrayal, metadata
//! extension, data quality, lineage, aggregates and free text.

use md_model::builtins::{xs, XS_ANY_TYPE_NAME, XS_ANY_URI_NAME, XS_STRING_NAME};
use md_model::{MaxOccurs, NamespaceCatalog, Occurs, QName, TypeDeclaration};

use super::common::{
    abstract_class, class, code_list, enumeration, value_property, ABSTRACT_OBJECT_TYPE,
    CHARACTER_STRING,
};
use super::{
    gco, gmd, gsr, gss, gts, GCO_NAMESPACE, GMD_NAMESPACE, GSR_NAMESPACE, GSS_NAMESPACE,
    GTS_NAMESPACE,
};

const CODE_LISTS: &[&str] = &[
    "CI_DateTypeCode",
    "CI_OnLineFunctionCode",
    "CI_PresentationFormCode",
    "CI_RoleCode",
    "Country",
    "DQ_EvaluationMethodTypeCode",
    "DS_AssociationTypeCode",
    "DS_InitiativeTypeCode",
    "LanguageCode",
    "MD_CellGeometryCode",
    "MD_CharacterSetCode",
    "MD_ClassificationCode",
    "MD_CoverageContentTypeCode",
    "MD_DatatypeCode",
    "MD_DimensionNameTypeCode",
    "MD_DistributionUnits",
    "MD_GeometricObjectTypeCode",
    "MD_ImagingConditionCode",
    "MD_KeywordTypeCode",
    "MD_MaintenanceFrequencyCode",
    "MD_MediumFormatCode",
    "MD_MediumNameCode",
    "MD_ProgressCode",
    "MD_RestrictionCode",
    "MD_ScopeCode",
    "MD_SpatialRepresentationTypeCode",
    "MD_TopologyLevelCode",
];

const ENUMERATIONS: &[&str] = &["MD_ObligationCode", "MD_PixelOrientationCode", "MD_TopicCategoryCode"];

pub fn catalog() -> NamespaceCatalog {
    let mut catalog = NamespaceCatalog::new(GMD_NAMESPACE, "gmd")
        .depends_on(GSS_NAMESPACE)
        .depends_on(GTS_NAMESPACE)
        .depends_on(GCO_NAMESPACE)
        .depends_on(GSR_NAMESPACE);

    for name in CODE_LISTS {
        code_list(&mut catalog, name);
    }
    for name in ENUMERATIONS {
        enumeration(&mut catalog, name);
    }

    citation(&mut catalog);
    identification(&mut catalog);
    metadata_entity(&mut catalog);
    maintenance(&mut catalog);
    constraints(&mut catalog);
    distribution(&mut catalog);
    spatial_representation(&mut catalog);
    reference_system(&mut catalog);
    extent(&mut catalog);
    content(&mut catalog);
    application_schema(&mut catalog);
    portrayal(&mut catalog);
    metadata_extension(&mut catalog);
    data_quality(&mut catalog);
    lineage(&mut catalog);
    aggregates(&mut catalog);
    free_text(&mut catalog);

    catalog
}

/// `{class}_PropertyType`
fn property(class: &str) -> QName {
    gmd(&format!("{class}_PropertyType"))
}

fn character_string() -> QName {
    gco("CharacterString_PropertyType")
}

fn object() -> QName {
    ABSTRACT_OBJECT_TYPE.clone()
}

/// Shorthand for the common case of a class without substitution group.
fn object_class<'c>(catalog: &'c mut NamespaceCatalog, name: &str) -> &'c mut TypeDeclaration {
    class(catalog, name, object(), None)
}

/// Union classes (`xs:choice` at the top level) do not derive from `gco:AbstractObject_Type`,
/// and their property types cannot hold references.
fn union_class<'c>(catalog: &'c mut NamespaceCatalog, name: &str) -> &'c mut TypeDeclaration {
    let type_name = catalog.name(&format!("{name}_Type"));
    let element_name = catalog.name(name);
    catalog.element(name, type_name.clone());
    value_property(catalog, &format!("{name}_PropertyType"), element_name, type_name);
    catalog
        .complex(&format!("{name}_Type"))
        .extends(XS_ANY_TYPE_NAME.clone())
}

fn citation(catalog: &mut NamespaceCatalog) {
    object_class(catalog, "CI_ResponsibleParty")
        .element("individualName", character_string(), Occurs::OPTIONAL)
        .element("organisationName", character_string(), Occurs::OPTIONAL)
        .element("positionName", character_string(), Occurs::OPTIONAL)
        .element("contactInfo", property("CI_Contact"), Occurs::OPTIONAL)
        .element("role", property("CI_RoleCode"), Occurs::REQUIRED);
    object_class(catalog, "CI_Citation")
        .element("title", character_string(), Occurs::REQUIRED)
        .element("alternateTitle", character_string(), Occurs::ANY)
        .element("date", property("CI_Date"), Occurs::AT_LEAST_ONE)
        .element("edition", character_string(), Occurs::OPTIONAL)
        .element("editionDate", gco("Date_PropertyType"), Occurs::OPTIONAL)
        .element("identifier", property("MD_Identifier"), Occurs::ANY)
        .element("citedResponsibleParty", property("CI_ResponsibleParty"), Occurs::ANY)
        .element("presentationForm", property("CI_PresentationFormCode"), Occurs::ANY)
        .element("series", property("CI_Series"), Occurs::OPTIONAL)
        .element("otherCitationDetails", character_string(), Occurs::OPTIONAL)
        .element("collectiveTitle", character_string(), Occurs::OPTIONAL)
        .element("ISBN", character_string(), Occurs::OPTIONAL)
        .element("ISSN", character_string(), Occurs::OPTIONAL);
    object_class(catalog, "CI_Address")
        .element("deliveryPoint", character_string(), Occurs::ANY)
        .element("city", character_string(), Occurs::OPTIONAL)
        .element("administrativeArea", character_string(), Occurs::OPTIONAL)
        .element("postalCode", character_string(), Occurs::OPTIONAL)
        .element("country", character_string(), Occurs::OPTIONAL)
        .element("electronicMailAddress", character_string(), Occurs::ANY);
    object_class(catalog, "CI_OnlineResource")
        .element("linkage", property("URL"), Occurs::REQUIRED)
        .element("protocol", character_string(), Occurs::OPTIONAL)
        .element("applicationProfile", character_string(), Occurs::OPTIONAL)
        .element("name", character_string(), Occurs::OPTIONAL)
        .element("description", character_string(), Occurs::OPTIONAL)
        .element("function", property("CI_OnLineFunctionCode"), Occurs::OPTIONAL);
    object_class(catalog, "CI_Contact")
        .element("phone", property("CI_Telephone"), Occurs::OPTIONAL)
        .element("address", property("CI_Address"), Occurs::OPTIONAL)
        .element("onlineResource", property("CI_OnlineResource"), Occurs::OPTIONAL)
        .element("hoursOfService", character_string(), Occurs::OPTIONAL)
        .element("contactInstructions", character_string(), Occurs::OPTIONAL);
    object_class(catalog, "CI_Series")
        .element("name", character_string(), Occurs::OPTIONAL)
        .element("issueIdentification", character_string(), Occurs::OPTIONAL)
        .element("page", character_string(), Occurs::OPTIONAL);
    object_class(catalog, "CI_Telephone")
        .element("voice", character_string(), Occurs::ANY)
        .element("facsimile", character_string(), Occurs::ANY);
    object_class(catalog, "CI_Date")
        .element("date", gco("Date_PropertyType"), Occurs::REQUIRED)
        .element("dateType", property("CI_DateTypeCode"), Occurs::REQUIRED);

    let url = gmd("URL");
    catalog.element("URL", XS_ANY_URI_NAME.clone());
    value_property(catalog, "URL_PropertyType", url, XS_ANY_URI_NAME.clone());
}

fn identification(catalog: &mut NamespaceCatalog) {
    let identification = gmd("AbstractMD_Identification");
    abstract_class(catalog, "AbstractMD_Identification", "MD_Identification", object(), None)
        .element("citation", property("CI_Citation"), Occurs::REQUIRED)
        .element("abstract", character_string(), Occurs::REQUIRED)
        .element("purpose", character_string(), Occurs::OPTIONAL)
        .element("credit", character_string(), Occurs::ANY)
        .element("status", property("MD_ProgressCode"), Occurs::ANY)
        .element("pointOfContact", property("CI_ResponsibleParty"), Occurs::ANY)
        .element("resourceMaintenance", property("MD_MaintenanceInformation"), Occurs::ANY)
        .element("graphicOverview", property("MD_BrowseGraphic"), Occurs::ANY)
        .element("resourceFormat", property("MD_Format"), Occurs::ANY)
        .element("descriptiveKeywords", property("MD_Keywords"), Occurs::ANY)
        .element("resourceSpecificUsage", property("MD_Usage"), Occurs::ANY)
        .element("resourceConstraints", property("MD_Constraints"), Occurs::ANY)
        .element("aggregationInfo", property("MD_AggregateInformation"), Occurs::ANY);
    class(
        catalog,
        "MD_DataIdentification",
        gmd("AbstractMD_Identification_Type"),
        Some(identification.clone()),
    )
    .element(
        "spatialRepresentationType",
        property("MD_SpatialRepresentationTypeCode"),
        Occurs::ANY,
    )
    .element("spatialResolution", property("MD_Resolution"), Occurs::ANY)
    .element("language", character_string(), Occurs::AT_LEAST_ONE)
    .element("characterSet", property("MD_CharacterSetCode"), Occurs::ANY)
    .element("topicCategory", property("MD_TopicCategoryCode"), Occurs::ANY)
    .element("environmentDescription", character_string(), Occurs::OPTIONAL)
    .element("extent", property("EX_Extent"), Occurs::ANY)
    .element("supplementalInformation", character_string(), Occurs::OPTIONAL);
    class(
        catalog,
        "MD_ServiceIdentification",
        gmd("AbstractMD_Identification_Type"),
        Some(identification),
    );

    object_class(catalog, "MD_RepresentativeFraction").element(
        "denominator",
        gco("Integer_PropertyType"),
        Occurs::REQUIRED,
    );
    object_class(catalog, "MD_Usage")
        .element("specificUsage", character_string(), Occurs::REQUIRED)
        .element("usageDateTime", gco("DateTime_PropertyType"), Occurs::OPTIONAL)
        .element("userDeterminedLimitations", character_string(), Occurs::OPTIONAL)
        .element("userContactInfo", property("CI_ResponsibleParty"), Occurs::AT_LEAST_ONE);
    object_class(catalog, "MD_Keywords")
        .element("keyword", character_string(), Occurs::AT_LEAST_ONE)
        .element("type", property("MD_KeywordTypeCode"), Occurs::OPTIONAL)
        .element("thesaurusName", property("CI_Citation"), Occurs::OPTIONAL);
    object_class(catalog, "DS_Association");
    object_class(catalog, "MD_AggregateInformation")
        .element("aggregateDataSetName", property("CI_Citation"), Occurs::OPTIONAL)
        .element("aggregateDataSetIdentifier", property("MD_Identifier"), Occurs::OPTIONAL)
        .element("associationType", property("DS_AssociationTypeCode"), Occurs::REQUIRED)
        .element("initiativeType", property("DS_InitiativeTypeCode"), Occurs::OPTIONAL);
    union_class(catalog, "MD_Resolution")
        .element("equivalentScale", property("MD_RepresentativeFraction"), Occurs::OPTIONAL)
        .element("distance", gco("Distance_PropertyType"), Occurs::OPTIONAL);
    object_class(catalog, "MD_BrowseGraphic")
        .element("fileName", character_string(), Occurs::REQUIRED)
        .element("fileDescription", character_string(), Occurs::OPTIONAL)
        .element("fileType", character_string(), Occurs::OPTIONAL);
}

fn metadata_entity(catalog: &mut NamespaceCatalog) {
    let object_reference = || gco("ObjectReference_PropertyType");
    object_class(catalog, "MD_Metadata")
        .element("fileIdentifier", character_string(), Occurs::OPTIONAL)
        .element("language", character_string(), Occurs::OPTIONAL)
        .element("characterSet", property("MD_CharacterSetCode"), Occurs::OPTIONAL)
        .element("parentIdentifier", character_string(), Occurs::OPTIONAL)
        .element("hierarchyLevel", property("MD_ScopeCode"), Occurs::ANY)
        .element("hierarchyLevelName", character_string(), Occurs::ANY)
        .element("contact", property("CI_ResponsibleParty"), Occurs::AT_LEAST_ONE)
        .element("dateStamp", gco("Date_PropertyType"), Occurs::REQUIRED)
        .element("metadataStandardName", character_string(), Occurs::OPTIONAL)
        .element("metadataStandardVersion", character_string(), Occurs::OPTIONAL)
        .element("dataSetURI", character_string(), Occurs::OPTIONAL)
        .element("locale", property("PT_Locale"), Occurs::ANY)
        .element(
            "spatialRepresentationInfo",
            property("MD_SpatialRepresentation"),
            Occurs::ANY,
        )
        .element("referenceSystemInfo", property("MD_ReferenceSystem"), Occurs::ANY)
        .element(
            "metadataExtensionInfo",
            property("MD_MetadataExtensionInformation"),
            Occurs::ANY,
        )
        .element("identificationInfo", property("MD_Identification"), Occurs::AT_LEAST_ONE)
        .element("contentInfo", property("MD_ContentInformation"), Occurs::ANY)
        .element("distributionInfo", property("MD_Distribution"), Occurs::OPTIONAL)
        .element("dataQualityInfo", property("DQ_DataQuality"), Occurs::ANY)
        .element(
            "portrayalCatalogueInfo",
            property("MD_PortrayalCatalogueReference"),
            Occurs::ANY,
        )
        .element("metadataConstraints", property("MD_Constraints"), Occurs::ANY)
        .element(
            "applicationSchemaInfo",
            property("MD_ApplicationSchemaInformation"),
            Occurs::ANY,
        )
        .element("metadataMaintenance", property("MD_MaintenanceInformation"), Occurs::OPTIONAL)
        .element("series", property("DS_Aggregate"), Occurs::ANY)
        .element("describes", property("DS_DataSet"), Occurs::ANY)
        .element("propertyType", object_reference(), Occurs::ANY)
        .element("featureType", object_reference(), Occurs::ANY)
        .element("featureAttribute", object_reference(), Occurs::ANY);
}

fn maintenance(catalog: &mut NamespaceCatalog) {
    object_class(catalog, "MD_MaintenanceInformation")
        .element(
            "maintenanceAndUpdateFrequency",
            property("MD_MaintenanceFrequencyCode"),
            Occurs::REQUIRED,
        )
        .element("dateOfNextUpdate", gco("Date_PropertyType"), Occurs::OPTIONAL)
        .element(
            "userDefinedMaintenanceFrequency",
            gts("TM_PeriodDuration_PropertyType"),
            Occurs::OPTIONAL,
        )
        .element("updateScope", property("MD_ScopeCode"), Occurs::ANY)
        .element("updateScopeDescription", property("MD_ScopeDescription"), Occurs::ANY)
        .element("maintenanceNote", character_string(), Occurs::ANY)
        .element("contact", property("CI_ResponsibleParty"), Occurs::ANY);

    let object_reference = || gco("ObjectReference_PropertyType");
    union_class(catalog, "MD_ScopeDescription")
        .element("attributes", object_reference(), Occurs::ANY)
        .element("features", object_reference(), Occurs::ANY)
        .element("featureInstances", object_reference(), Occurs::ANY)
        .element("attributeInstances", object_reference(), Occurs::ANY)
        .element("dataset", character_string(), Occurs::OPTIONAL)
        .element("other", character_string(), Occurs::OPTIONAL);
}

fn constraints(catalog: &mut NamespaceCatalog) {
    let head = gmd("MD_Constraints");
    object_class(catalog, "MD_Constraints").element("useLimitation", character_string(), Occurs::ANY);
    class(catalog, "MD_LegalConstraints", gmd("MD_Constraints_Type"), Some(head.clone()))
        .element("accessConstraints", property("MD_RestrictionCode"), Occurs::ANY)
        .element("useConstraints", property("MD_RestrictionCode"), Occurs::ANY)
        .element("otherConstraints", character_string(), Occurs::ANY);
    class(catalog, "MD_SecurityConstraints", gmd("MD_Constraints_Type"), Some(head))
        .element("classification", property("MD_ClassificationCode"), Occurs::REQUIRED)
        .element("userNote", character_string(), Occurs::OPTIONAL)
        .element("classificationSystem", character_string(), Occurs::OPTIONAL)
        .element("handlingDescription", character_string(), Occurs::OPTIONAL);
}

fn distribution(catalog: &mut NamespaceCatalog) {
    object_class(catalog, "MD_Medium")
        .element("name", property("MD_MediumNameCode"), Occurs::OPTIONAL)
        .element("density", gco("Real_PropertyType"), Occurs::ANY)
        .element("densityUnits", character_string(), Occurs::OPTIONAL)
        .element("volumes", gco("Integer_PropertyType"), Occurs::OPTIONAL)
        .element("mediumFormat", property("MD_MediumFormatCode"), Occurs::ANY)
        .element("mediumNote", character_string(), Occurs::OPTIONAL);
    object_class(catalog, "MD_DigitalTransferOptions")
        .element("unitsOfDistribution", character_string(), Occurs::OPTIONAL)
        .element("transferSize", gco("Real_PropertyType"), Occurs::OPTIONAL)
        .element("onLine", property("CI_OnlineResource"), Occurs::ANY)
        .element("offLine", property("MD_Medium"), Occurs::OPTIONAL);
    object_class(catalog, "MD_StandardOrderProcess")
        .element("fees", character_string(), Occurs::OPTIONAL)
        .element("plannedAvailableDateTime", gco("DateTime_PropertyType"), Occurs::OPTIONAL)
        .element("orderingInstructions", character_string(), Occurs::OPTIONAL)
        .element("turnaround", character_string(), Occurs::OPTIONAL);
    object_class(catalog, "MD_Distributor")
        .element("distributorContact", property("CI_ResponsibleParty"), Occurs::REQUIRED)
        .element("distributionOrderProcess", property("MD_StandardOrderProcess"), Occurs::ANY)
        .element("distributorFormat", property("MD_Format"), Occurs::ANY)
        .element(
            "distributorTransferOptions",
            property("MD_DigitalTransferOptions"),
            Occurs::ANY,
        );
    object_class(catalog, "MD_Distribution")
        .element("distributionFormat", property("MD_Format"), Occurs::ANY)
        .element("distributor", property("MD_Distributor"), Occurs::ANY)
        .element("transferOptions", property("MD_DigitalTransferOptions"), Occurs::ANY);
    object_class(catalog, "MD_Format")
        .element("name", character_string(), Occurs::REQUIRED)
        .element("version", character_string(), Occurs::REQUIRED)
        .element("amendmentNumber", character_string(), Occurs::OPTIONAL)
        .element("specification", character_string(), Occurs::OPTIONAL)
        .element("fileDecompressionTechnique", character_string(), Occurs::OPTIONAL)
        .element("formatDistributor", property("MD_Distributor"), Occurs::ANY);
}

fn spatial_representation(catalog: &mut NamespaceCatalog) {
    let head = gmd("AbstractMD_SpatialRepresentation");
    abstract_class(
        catalog,
        "AbstractMD_SpatialRepresentation",
        "MD_SpatialRepresentation",
        object(),
        None,
    );
    class(
        catalog,
        "MD_GridSpatialRepresentation",
        gmd("AbstractMD_SpatialRepresentation_Type"),
        Some(head.clone()),
    )
    .element("numberOfDimensions", gco("Integer_PropertyType"), Occurs::REQUIRED)
    .element("axisDimensionProperties", property("MD_Dimension"), Occurs::ANY)
    .element("cellGeometry", property("MD_CellGeometryCode"), Occurs::REQUIRED)
    .element(
        "transformationParameterAvailability",
        gco("Boolean_PropertyType"),
        Occurs::REQUIRED,
    );
    class(
        catalog,
        "MD_VectorSpatialRepresentation",
        gmd("AbstractMD_SpatialRepresentation_Type"),
        Some(head),
    )
    .element("topologyLevel", property("MD_TopologyLevelCode"), Occurs::OPTIONAL)
    .element("geometricObjects", property("MD_GeometricObjects"), Occurs::ANY);

    let grid = gmd("MD_GridSpatialRepresentation");
    class(
        catalog,
        "MD_Georeferenceable",
        gmd("MD_GridSpatialRepresentation_Type"),
        Some(grid.clone()),
    )
    .element("controlPointAvailability", gco("Boolean_PropertyType"), Occurs::REQUIRED)
    .element(
        "orientationParameterAvailability",
        gco("Boolean_PropertyType"),
        Occurs::REQUIRED,
    )
    .element("orientationParameterDescription", character_string(), Occurs::OPTIONAL)
    .element("georeferencedParameters", gco("Record_PropertyType"), Occurs::REQUIRED)
    .element("parameterCitation", property("CI_Citation"), Occurs::ANY);
    class(
        catalog,
        "MD_Georectified",
        gmd("MD_GridSpatialRepresentation_Type"),
        Some(grid),
    )
    .element("checkPointAvailability", gco("Boolean_PropertyType"), Occurs::REQUIRED)
    .element("checkPointDescription", character_string(), Occurs::OPTIONAL)
    .element("cornerPoints", gss("GM_Point_PropertyType"), Occurs::ANY)
    .element("centerPoint", gss("GM_Point_PropertyType"), Occurs::OPTIONAL)
    .element("pointInPixel", property("MD_PixelOrientationCode"), Occurs::REQUIRED)
    .element("transformationDimensionDescription", character_string(), Occurs::OPTIONAL)
    .element(
        "transformationDimensionMapping",
        character_string(),
        Occurs::new(0, MaxOccurs::Count(2)),
    );

    object_class(catalog, "MD_Dimension")
        .element("dimensionName", property("MD_DimensionNameTypeCode"), Occurs::REQUIRED)
        .element("dimensionSize", gco("Integer_PropertyType"), Occurs::REQUIRED)
        .element("resolution", gco("Measure_PropertyType"), Occurs::OPTIONAL);
    object_class(catalog, "MD_GeometricObjects")
        .element(
            "geometricObjectType",
            property("MD_GeometricObjectTypeCode"),
            Occurs::REQUIRED,
        )
        .element("geometricObjectCount", gco("Integer_PropertyType"), Occurs::OPTIONAL);
}

fn reference_system(catalog: &mut NamespaceCatalog) {
    abstract_class(
        catalog,
        "AbstractRS_ReferenceSystem",
        "RS_ReferenceSystem",
        object(),
        None,
    )
    .element("name", property("RS_Identifier"), Occurs::REQUIRED)
    .element("domainOfValidity", property("EX_Extent"), Occurs::ANY);
    object_class(catalog, "MD_Identifier")
        .element("authority", property("CI_Citation"), Occurs::OPTIONAL)
        .element("code", character_string(), Occurs::REQUIRED);
    class(
        catalog,
        "RS_Identifier",
        gmd("MD_Identifier_Type"),
        Some(gmd("MD_Identifier")),
    )
    .element("codeSpace", character_string(), Occurs::OPTIONAL)
    .element("version", character_string(), Occurs::OPTIONAL);
    object_class(catalog, "MD_ReferenceSystem").element(
        "referenceSystemIdentifier",
        property("RS_Identifier"),
        Occurs::OPTIONAL,
    );
}

fn extent(catalog: &mut NamespaceCatalog) {
    let head = gmd("AbstractEX_GeographicExtent");
    abstract_class(
        catalog,
        "AbstractEX_GeographicExtent",
        "EX_GeographicExtent",
        object(),
        None,
    )
    .element("extentTypeCode", gco("Boolean_PropertyType"), Occurs::OPTIONAL);
    class(
        catalog,
        "EX_BoundingPolygon",
        gmd("AbstractEX_GeographicExtent_Type"),
        Some(head.clone()),
    )
    .element("polygon", gss("GM_Object_PropertyType"), Occurs::AT_LEAST_ONE);
    class(
        catalog,
        "EX_GeographicBoundingBox",
        gmd("AbstractEX_GeographicExtent_Type"),
        Some(head.clone()),
    )
    .element("westBoundLongitude", gco("Decimal_PropertyType"), Occurs::REQUIRED)
    .element("eastBoundLongitude", gco("Decimal_PropertyType"), Occurs::REQUIRED)
    .element("southBoundLatitude", gco("Decimal_PropertyType"), Occurs::REQUIRED)
    .element("northBoundLatitude", gco("Decimal_PropertyType"), Occurs::REQUIRED);
    class(
        catalog,
        "EX_GeographicDescription",
        gmd("AbstractEX_GeographicExtent_Type"),
        Some(head),
    )
    .element("geographicIdentifier", property("MD_Identifier"), Occurs::REQUIRED);

    object_class(catalog, "EX_TemporalExtent").element(
        "extent",
        gts("TM_Primitive_PropertyType"),
        Occurs::REQUIRED,
    );
    class(
        catalog,
        "EX_SpatialTemporalExtent",
        gmd("EX_TemporalExtent_Type"),
        Some(gmd("EX_TemporalExtent")),
    )
    .element("spatialExtent", property("EX_GeographicExtent"), Occurs::AT_LEAST_ONE);
    object_class(catalog, "EX_VerticalExtent")
        .element("minimumValue", gco("Real_PropertyType"), Occurs::REQUIRED)
        .element("maximumValue", gco("Real_PropertyType"), Occurs::REQUIRED)
        .element("verticalCRS", gsr("SC_CRS_PropertyType"), Occurs::REQUIRED);
    object_class(catalog, "EX_Extent")
        .element("description", character_string(), Occurs::OPTIONAL)
        .element("geographicElement", property("EX_GeographicExtent"), Occurs::ANY)
        .element("temporalElement", property("EX_TemporalExtent"), Occurs::ANY)
        .element("verticalElement", property("EX_VerticalExtent"), Occurs::ANY);
}

fn content(catalog: &mut NamespaceCatalog) {
    let head = gmd("AbstractMD_ContentInformation");
    abstract_class(
        catalog,
        "AbstractMD_ContentInformation",
        "MD_ContentInformation",
        object(),
        None,
    );
    class(
        catalog,
        "MD_FeatureCatalogueDescription",
        gmd("AbstractMD_ContentInformation_Type"),
        Some(head.clone()),
    )
    .element("complianceCode", gco("Boolean_PropertyType"), Occurs::OPTIONAL)
    .element("language", character_string(), Occurs::ANY)
    .element("includedWithDataset", gco("Boolean_PropertyType"), Occurs::REQUIRED)
    .element("featureTypes", gco("GenericName_PropertyType"), Occurs::ANY)
    .element("featureCatalogueCitation", property("CI_Citation"), Occurs::AT_LEAST_ONE);
    class(
        catalog,
        "MD_CoverageDescription",
        gmd("AbstractMD_ContentInformation_Type"),
        Some(head),
    )
    .element("attributeDescription", gco("RecordType_PropertyType"), Occurs::REQUIRED)
    .element("contentType", property("MD_CoverageContentTypeCode"), Occurs::REQUIRED)
    .element("dimension", property("MD_RangeDimension"), Occurs::ANY);

    let real = || gco("Real_PropertyType");
    let boolean = || gco("Boolean_PropertyType");
    class(
        catalog,
        "MD_ImageDescription",
        gmd("MD_CoverageDescription_Type"),
        Some(gmd("MD_CoverageDescription")),
    )
    .element("illuminationElevationAngle", real(), Occurs::OPTIONAL)
    .element("illuminationAzimuthAngle", real(), Occurs::OPTIONAL)
    .element("imagingCondition", property("MD_ImagingConditionCode"), Occurs::OPTIONAL)
    .element("imageQualityCode", property("MD_Identifier"), Occurs::OPTIONAL)
    .element("cloudCoverPercentage", real(), Occurs::OPTIONAL)
    .element("processingLevelCode", property("MD_Identifier"), Occurs::OPTIONAL)
    .element("compressionGenerationQuantity", gco("Integer_PropertyType"), Occurs::OPTIONAL)
    .element("triangulationIndicator", boolean(), Occurs::OPTIONAL)
    .element("radiometricCalibrationDataAvailability", boolean(), Occurs::OPTIONAL)
    .element("cameraCalibrationInformationAvailability", boolean(), Occurs::OPTIONAL)
    .element("filmDistortionInformationAvailability", boolean(), Occurs::OPTIONAL)
    .element("lensDistortionInformationAvailability", boolean(), Occurs::OPTIONAL);

    object_class(catalog, "MD_RangeDimension")
        .element("sequenceIdentifier", gco("MemberName_PropertyType"), Occurs::OPTIONAL)
        .element("descriptor", character_string(), Occurs::OPTIONAL);
    class(
        catalog,
        "MD_Band",
        gmd("MD_RangeDimension_Type"),
        Some(gmd("MD_RangeDimension")),
    )
    .element("maxValue", real(), Occurs::OPTIONAL)
    .element("minValue", real(), Occurs::OPTIONAL)
    .element("units", gco("UomLength_PropertyType"), Occurs::OPTIONAL)
    .element("peakResponse", real(), Occurs::OPTIONAL)
    .element("bitsPerValue", gco("Integer_PropertyType"), Occurs::OPTIONAL)
    .element("toneGradation", gco("Integer_PropertyType"), Occurs::OPTIONAL)
    .element("scaleFactor", real(), Occurs::OPTIONAL)
    .element("offset", real(), Occurs::OPTIONAL);
}

fn application_schema(catalog: &mut NamespaceCatalog) {
    object_class(catalog, "MD_ApplicationSchemaInformation")
        .element("name", property("CI_Citation"), Occurs::REQUIRED)
        .element("schemaLanguage", character_string(), Occurs::REQUIRED)
        .element("constraintLanguage", character_string(), Occurs::REQUIRED)
        .element("schemaAscii", character_string(), Occurs::OPTIONAL)
        .element("graphicsFile", gco("Binary_PropertyType"), Occurs::OPTIONAL)
        .element("softwareDevelopmentFile", gco("Binary_PropertyType"), Occurs::OPTIONAL)
        .element("softwareDevelopmentFileFormat", character_string(), Occurs::OPTIONAL);
}

fn portrayal(catalog: &mut NamespaceCatalog) {
    object_class(catalog, "MD_PortrayalCatalogueReference").element(
        "portrayalCatalogueCitation",
        property("CI_Citation"),
        Occurs::AT_LEAST_ONE,
    );
}

fn metadata_extension(catalog: &mut NamespaceCatalog) {
    object_class(catalog, "MD_MetadataExtensionInformation")
        .element("extensionOnLineResource", property("CI_OnlineResource"), Occurs::OPTIONAL)
        .element(
            "extendedElementInformation",
            property("MD_ExtendedElementInformation"),
            Occurs::ANY,
        );
    object_class(catalog, "MD_ExtendedElementInformation")
        .element("name", character_string(), Occurs::REQUIRED)
        .element("shortName", character_string(), Occurs::OPTIONAL)
        .element("domainCode", gco("Integer_PropertyType"), Occurs::OPTIONAL)
        .element("definition", character_string(), Occurs::REQUIRED)
        .element("obligation", property("MD_ObligationCode"), Occurs::OPTIONAL)
        .element("condition", character_string(), Occurs::OPTIONAL)
        .element("dataType", property("MD_DatatypeCode"), Occurs::REQUIRED)
        .element("maximumOccurrence", character_string(), Occurs::OPTIONAL)
        .element("domainValue", character_string(), Occurs::OPTIONAL)
        .element("parentEntity", character_string(), Occurs::AT_LEAST_ONE)
        .element("rule", character_string(), Occurs::REQUIRED)
        .element("rationale", character_string(), Occurs::ANY)
        .element("source", property("CI_ResponsibleParty"), Occurs::AT_LEAST_ONE);
}

/// Element categories of data quality with their concrete elements.
const DATA_QUALITY_ELEMENTS: &[(&str, &[&str])] = &[
    ("Completeness", &["DQ_CompletenessCommission", "DQ_CompletenessOmission"]),
    (
        "LogicalConsistency",
        &[
            "DQ_ConceptualConsistency",
            "DQ_DomainConsistency",
            "DQ_FormatConsistency",
            "DQ_TopologicalConsistency",
        ],
    ),
    (
        "PositionalAccuracy",
        &[
            "DQ_AbsoluteExternalPositionalAccuracy",
            "DQ_GriddedDataPositionalAccuracy",
            "DQ_RelativeInternalPositionalAccuracy",
        ],
    ),
    (
        "ThematicAccuracy",
        &[
            "DQ_ThematicClassificationCorrectness",
            "DQ_NonQuantitativeAttributeAccuracy",
            "DQ_QuantitativeAttributeAccuracy",
        ],
    ),
    (
        "TemporalAccuracy",
        &[
            "DQ_AccuracyOfATimeMeasurement",
            "DQ_TemporalConsistency",
            "DQ_TemporalValidity",
        ],
    ),
];

fn data_quality(catalog: &mut NamespaceCatalog) {
    object_class(catalog, "DQ_DataQuality")
        .element("scope", property("DQ_Scope"), Occurs::REQUIRED)
        .element("report", property("DQ_Element"), Occurs::ANY)
        .element("lineage", property("LI_Lineage"), Occurs::OPTIONAL);
    object_class(catalog, "DQ_Scope")
        .element("level", property("MD_ScopeCode"), Occurs::REQUIRED)
        .element("extent", property("EX_Extent"), Occurs::OPTIONAL)
        .element("levelDescription", property("MD_ScopeDescription"), Occurs::ANY);

    abstract_class(catalog, "AbstractDQ_Element", "DQ_Element", object(), None)
        .element("nameOfMeasure", character_string(), Occurs::ANY)
        .element("measureIdentification", property("MD_Identifier"), Occurs::OPTIONAL)
        .element("measureDescription", character_string(), Occurs::OPTIONAL)
        .element(
            "evaluationMethodType",
            property("DQ_EvaluationMethodTypeCode"),
            Occurs::OPTIONAL,
        )
        .element("evaluationMethodDescription", character_string(), Occurs::OPTIONAL)
        .element("evaluationProcedure", property("CI_Citation"), Occurs::OPTIONAL)
        .element("dateTime", gco("DateTime_PropertyType"), Occurs::ANY)
        .element("result", property("DQ_Result"), Occurs::new(1, MaxOccurs::Count(2)));

    for (category, elements) in DATA_QUALITY_ELEMENTS {
        let name = format!("AbstractDQ_{category}");
        abstract_class(
            catalog,
            &name,
            &format!("DQ_{category}"),
            gmd("AbstractDQ_Element_Type"),
            Some(gmd("AbstractDQ_Element")),
        );
        for element in *elements {
            class(
                catalog,
                element,
                gmd(&format!("{name}_Type")),
                Some(gmd(&name)),
            );
        }
    }

    let result = gmd("AbstractDQ_Result");
    abstract_class(catalog, "AbstractDQ_Result", "DQ_Result", object(), None);
    class(
        catalog,
        "DQ_ConformanceResult",
        gmd("AbstractDQ_Result_Type"),
        Some(result.clone()),
    )
    .element("specification", property("CI_Citation"), Occurs::REQUIRED)
    .element("explanation", character_string(), Occurs::REQUIRED)
    .element("pass", gco("Boolean_PropertyType"), Occurs::REQUIRED);
    class(
        catalog,
        "DQ_QuantitativeResult",
        gmd("AbstractDQ_Result_Type"),
        Some(result),
    )
    .element("valueType", gco("RecordType_PropertyType"), Occurs::OPTIONAL)
    .element("valueUnit", gco("UnitOfMeasure_PropertyType"), Occurs::REQUIRED)
    .element("errorStatistic", character_string(), Occurs::OPTIONAL)
    .element("value", gco("Record_PropertyType"), Occurs::AT_LEAST_ONE);
}

fn lineage(catalog: &mut NamespaceCatalog) {
    object_class(catalog, "LI_ProcessStep")
        .element("description", character_string(), Occurs::REQUIRED)
        .element("rationale", character_string(), Occurs::OPTIONAL)
        .element("dateTime", gco("DateTime_PropertyType"), Occurs::OPTIONAL)
        .element("processor", property("CI_ResponsibleParty"), Occurs::ANY)
        .element("source", property("LI_Source"), Occurs::ANY);
    object_class(catalog, "LI_Source")
        .element("description", character_string(), Occurs::OPTIONAL)
        .element("scaleDenominator", property("MD_RepresentativeFraction"), Occurs::OPTIONAL)
        .element("sourceReferenceSystem", property("MD_ReferenceSystem"), Occurs::OPTIONAL)
        .element("sourceCitation", property("CI_Citation"), Occurs::OPTIONAL)
        .element("sourceExtent", property("EX_Extent"), Occurs::ANY)
        .element("sourceStep", property("LI_ProcessStep"), Occurs::ANY);
    object_class(catalog, "LI_Lineage")
        .element("statement", character_string(), Occurs::OPTIONAL)
        .element("processStep", property("LI_ProcessStep"), Occurs::ANY)
        .element("source", property("LI_Source"), Occurs::ANY);
}

fn aggregates(catalog: &mut NamespaceCatalog) {
    let aggregate = gmd("AbstractDS_Aggregate");
    abstract_class(catalog, "AbstractDS_Aggregate", "DS_Aggregate", object(), None)
        .element("composedOf", property("DS_DataSet"), Occurs::AT_LEAST_ONE)
        .element("seriesMetadata", property("MD_Metadata"), Occurs::AT_LEAST_ONE)
        .element("subset", property("DS_Aggregate"), Occurs::ANY)
        .element("superset", property("DS_Aggregate"), Occurs::ANY);
    object_class(catalog, "DS_DataSet")
        .element("has", property("MD_Metadata"), Occurs::AT_LEAST_ONE)
        .element("partOf", property("DS_Aggregate"), Occurs::ANY);

    for name in ["DS_OtherAggregate", "DS_Series", "DS_Initiative"] {
        class(
            catalog,
            name,
            gmd("AbstractDS_Aggregate_Type"),
            Some(aggregate.clone()),
        );
    }
    for name in ["DS_Platform", "DS_Sensor", "DS_ProductionSeries"] {
        class(catalog, name, gmd("DS_Series_Type"), Some(gmd("DS_Series")));
    }
    class(
        catalog,
        "DS_StereoMate",
        gmd("DS_OtherAggregate_Type"),
        Some(gmd("DS_OtherAggregate")),
    );
}

fn free_text(catalog: &mut NamespaceCatalog) {
    // The property type extends gco:CharacterString_PropertyType, so the class helpers do not fit
    catalog.element("PT_FreeText", gmd("PT_FreeText_Type"));
    catalog
        .complex("PT_FreeText_Type")
        .extends(object())
        .element(
            "textGroup",
            property("LocalisedCharacterString"),
            Occurs::AT_LEAST_ONE,
        );
    catalog
        .complex("PT_FreeText_PropertyType")
        .extends(character_string())
        .element_ref(gmd("PT_FreeText"), gmd("PT_FreeText_Type"), Occurs::OPTIONAL);

    class(
        catalog,
        "LocalisedCharacterString",
        XS_STRING_NAME.clone(),
        Some(CHARACTER_STRING.clone()),
    )
    .attribute("id", xs("ID"), false)
    .attribute("locale", XS_ANY_URI_NAME.clone(), false);

    object_class(catalog, "PT_Locale")
        .element("languageCode", property("LanguageCode"), Occurs::REQUIRED)
        .element("country", property("Country"), Occurs::OPTIONAL)
        .element("characterEncoding", property("MD_CharacterSetCode"), Occurs::REQUIRED);
    union_class(catalog, "PT_LocaleContainer")
        .element("description", character_string(), Occurs::REQUIRED)
        .element("locale", property("PT_Locale"), Occurs::REQUIRED)
        .element("date", property("CI_Date"), Occurs::AT_LEAST_ONE)
        .element("responsibleParty", property("CI_ResponsibleParty"), Occurs::AT_LEAST_ONE)
        .element(
            "localisedString",
            property("LocalisedCharacterString"),
            Occurs::AT_LEAST_ONE,
        );
}
